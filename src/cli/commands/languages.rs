use anyhow::Result;

use crate::translation::{ServiceKind, print_languages};

/// Lists the static language table of one service, or of all services.
pub fn run_languages(service: Option<&str>) -> Result<()> {
    match service {
        Some(name) => {
            let kind: ServiceKind = name.parse()?;
            print_languages(&[kind]);
        }
        None => print_languages(&ServiceKind::ALL),
    }
    Ok(())
}
