pub mod commands;
pub mod diagnostics;
pub mod formats;
pub mod io;
pub mod params;
pub mod schema;
pub mod value;
