// Two-stage model load: the material library first, then the geometry that
// references it. A failed stage ends the load and nothing further is
// requested, so the caller never sees a model and never releases the gate.

use super::obj::{parse_mtl, parse_obj, AssetError, MaterialLibrary, Mesh};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("error loading {path}: {reason}")]
    Fetch { path: &'static str, reason: String },
    #[error("error parsing {path}")]
    Parse {
        path: &'static str,
        #[source]
        source: AssetError,
    },
    #[error("model load already finished")]
    Finished,
}

/// What a completed stage produced.
#[derive(Debug)]
pub enum LoadProgress {
    /// Material library parsed; carries the number of materials.
    Materials(usize),
    Model(Mesh),
}

enum Stage {
    Materials,
    Geometry(MaterialLibrary),
    Finished,
}

pub struct ModelLoad {
    material_path: &'static str,
    geometry_path: &'static str,
    stage: Stage,
}

impl ModelLoad {
    pub fn new(material_path: &'static str, geometry_path: &'static str) -> Self {
        Self {
            material_path,
            geometry_path,
            stage: Stage::Materials,
        }
    }

    /// Path the caller must fetch next, or `None` once the load has ended.
    pub fn next_path(&self) -> Option<&'static str> {
        match self.stage {
            Stage::Materials => Some(self.material_path),
            Stage::Geometry(_) => Some(self.geometry_path),
            Stage::Finished => None,
        }
    }

    /// Feed the fetch result for `next_path()`. Any error finishes the load.
    pub fn on_text(&mut self, fetched: Result<String, String>) -> Result<LoadProgress, LoadError> {
        match std::mem::replace(&mut self.stage, Stage::Finished) {
            Stage::Materials => {
                let path = self.material_path;
                let src = fetched.map_err(|reason| LoadError::Fetch { path, reason })?;
                let lib = parse_mtl(&src).map_err(|source| LoadError::Parse { path, source })?;
                let count = lib.materials.len();
                self.stage = Stage::Geometry(lib);
                Ok(LoadProgress::Materials(count))
            }
            Stage::Geometry(lib) => {
                let path = self.geometry_path;
                let src = fetched.map_err(|reason| LoadError::Fetch { path, reason })?;
                let mesh = parse_obj(&src, &lib).map_err(|source| LoadError::Parse { path, source })?;
                Ok(LoadProgress::Model(mesh))
            }
            Stage::Finished => Err(LoadError::Finished),
        }
    }
}
