use crate::object::{ObjectHit, ObjectList};
use crate::*;

/// Vertical gradient returned for rays that leave the scene.
#[derive(Clone, Debug)]
pub struct Background {
    pub bottom: RGB,
    pub top: RGB,
}

impl Background {
    pub fn sky() -> Self {
        Background {
            bottom: RGB::all(1.0),
            top: RGB::new(0.5, 0.7, 1.0),
        }
    }

    pub fn color(&self, ray: &Ray) -> RGB {
        let t = (ray.dir.normalize()[1] + 1.0) * 0.5;
        self.bottom.lerp(&self.top, t)
    }
}

pub struct Scene {
    objects: ObjectList,
    background: Background,
}

impl Scene {
    pub fn new(objects: ObjectList, background: Background) -> Self {
        Scene {
            objects,
            background,
        }
    }

    pub fn test_hit(&self, ray: &Ray, tnear: f32, tfar: f32) -> Option<ObjectHit> {
        self.objects.test_hit(ray, tnear, tfar)
    }

    pub fn background(&self, ray: &Ray) -> RGB {
        self.background.color(ray)
    }
}
