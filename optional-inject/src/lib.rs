#![doc = include_str!("./docs/lib.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod container;
mod key;
mod resolve;

pub use container::*;
pub use key::*;
pub use resolve::*;
