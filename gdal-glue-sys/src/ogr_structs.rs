#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct OGREnvelope {
    pub MinX: f64,
    pub MaxX: f64,
    pub MinY: f64,
    pub MaxY: f64,
}

impl Default for OGREnvelope {
    fn default() -> Self {
        Self {
            MinX: 0.0,
            MaxX: 0.0,
            MinY: 0.0,
            MaxY: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct OGREnvelope3D {
    pub MinX: f64,
    pub MaxX: f64,
    pub MinY: f64,
    pub MaxY: f64,
    pub MinZ: f64,
    pub MaxZ: f64,
}

impl Default for OGREnvelope3D {
    fn default() -> Self {
        Self {
            MinX: 0.0,
            MaxX: 0.0,
            MinY: 0.0,
            MaxY: 0.0,
            MinZ: 0.0,
            MaxZ: 0.0,
        }
    }
}
