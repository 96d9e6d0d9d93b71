#![no_std]

extern crate alloc;

mod bitvec;
mod chunks;
mod count;
mod eratosthenes;
mod error;
mod segmented;
mod trial_division;
mod util;


pub use bitvec::*;
pub use chunks::*;
pub use count::*;
pub use eratosthenes::*;
pub use error::*;
pub use segmented::*;
pub use trial_division::*;
pub use util::ceil_div_usize;
