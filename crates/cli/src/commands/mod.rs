pub(crate) mod import;
pub(crate) mod list;
pub(crate) mod resources;
pub(crate) mod serve;
