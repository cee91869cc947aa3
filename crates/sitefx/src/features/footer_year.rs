//! Footer year

use super::require;
use crate::{names, Clock, PageError, PageHost};
use sitefx_dom::NodeId;

/// Writes the current year into `#year` once, at setup
#[derive(Debug, Clone, Copy)]
pub struct FooterYear {
    pub target: NodeId,
    pub year: i32,
}

impl FooterYear {
    pub fn setup<H: PageHost + ?Sized>(host: &mut H, clock: &dyn Clock) -> Result<Self, PageError> {
        let target = require(host, names::YEAR)?;
        let year = clock.current_year();
        host.set_text(target, &year.to_string());
        Ok(Self { target, year })
    }
}
