pub mod call;
pub mod info;
pub mod serve;
pub mod utils;

pub use call::run_call;
pub use info::run_info;
pub use serve::run_serve;
