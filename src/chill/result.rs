/// Crate-wide result, every module error converts into `anyhow::Error`
pub type Result<T = ()> = anyhow::Result<T>;
