use std::{collections::BTreeMap, fmt, io, sync::Arc};

#[derive(Debug, Clone)]
pub struct VisError {
    pub key: &'static str,
    pub args: BTreeMap<&'static str, String>,
    pub causes: Vec<VisCause>,
}

#[derive(Debug, Clone)]
pub enum VisCause {
    Vis(Box<VisError>),
    Std(Arc<dyn std::error::Error + Send + Sync>),
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

    pub fn push_vis(mut self, cause: VisError) -> Self {
        self.causes.push(VisCause::Vis(Box::new(cause)));
        self
    }

    pub fn push_std(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.causes.push(VisCause::Std(Arc::new(cause)));
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
        self.causes.iter().find_map(|c| match c {
            VisCause::Vis(e) => Some(e.as_ref() as &dyn std::error::Error),
            VisCause::Std(e) => Some(e.as_ref() as &(dyn std::error::Error + 'static)),
        })
    }
}

impl From<io::Error> for VisError {
    fn from(err: io::Error) -> Self {
        VisError::new("io-error").push_std(err)
    }
}

impl From<wgpu::CreateSurfaceError> for VisError {
    fn from(err: wgpu::CreateSurfaceError) -> Self {
        VisError::new("wgpu::CreateSurfaceError").push_std(err)
    }
}

impl From<wgpu::RequestAdapterError> for VisError {
    fn from(err: wgpu::RequestAdapterError) -> Self {
        VisError::new("wgpu::RequestAdapterError").push_std(err)
    }
}

impl From<wgpu::RequestDeviceError> for VisError {
    fn from(err: wgpu::RequestDeviceError) -> Self {
        VisError::new("wgpu::RequestDeviceError").push_std(err)
    }
}

impl From<winit::error::EventLoopError> for VisError {
    fn from(err: winit::error::EventLoopError) -> Self {
        VisError::new("winit::error::EventLoopError").push_std(err)
    }
}

impl From<winit::error::OsError> for VisError {
    fn from(err: winit::error::OsError) -> Self {
        VisError::new("winit::error::OsError").push_std(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_lists_args_in_key_order() {
        let err = VisError::new("invalid-car-sizes")
            .with_arg("len", 3)
            .with_arg("expected", 10);
        assert_eq!(err.to_string(), "invalid-car-sizes(expected=10, len=3)");
    }

    #[test]
    fn source_is_first_cause() {
        let inner = VisError::new("inner");
        let err = VisError::new("outer").push_vis(inner);
        assert_eq!(err.source().map(|e| e.to_string()), Some("inner()".to_string()));

        let io = io::Error::new(io::ErrorKind::Other, "boom");
        let err: VisError = io.into();
        assert_eq!(err.key, "io-error");
        assert_eq!(err.source().map(|e| e.to_string()), Some("boom".to_string()));
    }
}
