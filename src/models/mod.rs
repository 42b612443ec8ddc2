// import modules
mod post;

// export modules
pub use post::*;
