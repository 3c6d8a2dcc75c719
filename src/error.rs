use std::{collections::BTreeMap, fmt, io, sync::Arc};

/// Structured setup/runtime error: a stable key plus named arguments,
/// with optional underlying causes.
#[derive(Debug, Clone)]
pub struct VisError {
    pub key: &'static str,
    pub args: BTreeMap<&'static str, String>,
    pub causes: Vec<Arc<dyn std::error::Error + Send + Sync>>,
}

impl VisError {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            args: BTreeMap::new(),
            causes: Vec::new(),
        }
    }

    pub fn with_arg(mut self, k: &'static str, v: impl ToString) -> Self {
        self.args.insert(k, v.to_string());
        self
    }

    pub fn push_std(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.causes.push(Arc::new(cause));
        self
    }
}

impl fmt::Display for VisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.key)?;
        let mut first = true;
        for (k, v) in &self.args {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{k}={v}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for VisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes
            .first()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

impl From<io::Error> for VisError {
    fn from(err: io::Error) -> Self {
        VisError::new("io-error").push_std(err)
    }
}

impl From<serde_json::Error> for VisError {
    fn from(err: serde_json::Error) -> Self {
        VisError::new("json-error").push_std(err)
    }
}

impl From<wgpu::CreateSurfaceError> for VisError {
    fn from(err: wgpu::CreateSurfaceError) -> Self {
        VisError::new("wgpu::CreateSurfaceError").push_std(err)
    }
}

impl From<wgpu::RequestDeviceError> for VisError {
    fn from(err: wgpu::RequestDeviceError) -> Self {
        VisError::new("wgpu::RequestDeviceError").push_std(err)
    }
}

impl From<wgpu::RequestAdapterError> for VisError {
    fn from(err: wgpu::RequestAdapterError) -> Self {
        VisError::new("wgpu::RequestAdapterError").push_std(err)
    }
}

impl From<winit::error::EventLoopError> for VisError {
    fn from(err: winit::error::EventLoopError) -> Self {
        VisError::new("winit::error::EventLoopError").push_std(err)
    }
}
