mod errors;
mod record_loader;
mod sample;
mod source;
#[cfg(test)]
mod tests;

pub use record_loader::RecordLoader;
pub use source::RecordSource;
