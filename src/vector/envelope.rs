use gdal_glue_sys::{OGREnvelope, OGREnvelope3D};

/// A 2D bounding box.
///
/// Same layout as `OGREnvelope`. An envelope is uninitialised until one of
/// its bounds is set; it then behaves like an empty set for [`merge`](Self::merge).
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Envelope {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }
}

impl Envelope {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn is_init(&self) -> bool {
        self.min_x != f64::INFINITY
    }

    /// Grows `self` to also cover `other`.
    pub fn merge(&mut self, other: &Envelope) {
        self.min_x = self.min_x.min(other.min_x);
        self.max_x = self.max_x.max(other.max_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_y = self.max_y.max(other.max_y);
    }

    /// Shrinks `self` to the overlap with `other`. Disjoint envelopes leave
    /// `self` uninitialised.
    pub fn intersect(&mut self, other: &Envelope) {
        if !self.intersects(other) {
            *self = Envelope::default();
        } else if self.is_init() {
            self.min_x = self.min_x.max(other.min_x);
            self.max_x = self.max_x.min(other.max_x);
            self.min_y = self.min_y.max(other.min_y);
            self.max_y = self.max_y.min(other.max_y);
        } else {
            *self = *other;
        }
    }

    pub fn intersects(&self, other: &Envelope) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    pub fn contains(&self, other: &Envelope) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && self.max_x >= other.max_x
            && self.max_y >= other.max_y
    }
}

impl From<OGREnvelope> for Envelope {
    fn from(env: OGREnvelope) -> Self {
        Self::new(env.MinX, env.MaxX, env.MinY, env.MaxY)
    }
}

impl From<Envelope> for OGREnvelope {
    fn from(env: Envelope) -> Self {
        OGREnvelope {
            MinX: env.min_x,
            MaxX: env.max_x,
            MinY: env.min_y,
            MaxY: env.max_y,
        }
    }
}

/// A 3D bounding box, same layout as `OGREnvelope3D`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Envelope3D {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl Default for Envelope3D {
    fn default() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
            min_z: f64::INFINITY,
            max_z: f64::NEG_INFINITY,
        }
    }
}

impl Envelope3D {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64, min_z: f64, max_z: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            min_z,
            max_z,
        }
    }

    pub fn is_init(&self) -> bool {
        self.min_x != f64::INFINITY
    }

    /// The X/Y part of the box.
    pub fn to_2d(&self) -> Envelope {
        Envelope::new(self.min_x, self.max_x, self.min_y, self.max_y)
    }

    pub fn merge(&mut self, other: &Envelope3D) {
        self.min_x = self.min_x.min(other.min_x);
        self.max_x = self.max_x.max(other.max_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_y = self.max_y.max(other.max_y);
        self.min_z = self.min_z.min(other.min_z);
        self.max_z = self.max_z.max(other.max_z);
    }

    pub fn intersect(&mut self, other: &Envelope3D) {
        if !self.intersects(other) {
            *self = Envelope3D::default();
        } else if self.is_init() {
            self.min_x = self.min_x.max(other.min_x);
            self.max_x = self.max_x.min(other.max_x);
            self.min_y = self.min_y.max(other.min_y);
            self.max_y = self.max_y.min(other.max_y);
            self.min_z = self.min_z.max(other.min_z);
            self.max_z = self.max_z.min(other.max_z);
        } else {
            *self = *other;
        }
    }

    pub fn intersects(&self, other: &Envelope3D) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
            && self.min_z <= other.max_z
            && self.max_z >= other.min_z
    }

    pub fn contains(&self, other: &Envelope3D) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && self.min_z <= other.min_z
            && self.max_x >= other.max_x
            && self.max_y >= other.max_y
            && self.max_z >= other.max_z
    }
}

impl From<OGREnvelope3D> for Envelope3D {
    fn from(env: OGREnvelope3D) -> Self {
        Self::new(env.MinX, env.MaxX, env.MinY, env.MaxY, env.MinZ, env.MaxZ)
    }
}

impl From<Envelope3D> for OGREnvelope3D {
    fn from(env: Envelope3D) -> Self {
        OGREnvelope3D {
            MinX: env.min_x,
            MaxX: env.max_x,
            MinY: env.min_y,
            MaxY: env.max_y,
            MinZ: env.min_z,
            MaxZ: env.max_z,
        }
    }
}

const _: () = assert!(std::mem::size_of::<Envelope>() == std::mem::size_of::<OGREnvelope>());
const _: () = assert!(std::mem::size_of::<Envelope3D>() == std::mem::size_of::<OGREnvelope3D>());
