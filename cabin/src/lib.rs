pub mod debug;
pub mod dispatcher;
pub mod input;
pub mod logging;
pub mod sensor;
