//! `ikt options` – list option keys and the domain the editor offers for each.

use anyhow::Result;
use ikt_core::catalog::Widget;
use ikt_core::options::OptionKey;

pub fn run_options() -> Result<()> {
    println!("{:<14} {:<16} {}", "KEY", "LABEL", "VALUES");
    for key in OptionKey::ALL {
        let widget = key.widget();
        let domain = match widget {
            Widget::Choice { none_label, .. } => {
                format!("{} (empty: {none_label})", widget.describe())
            }
            _ => widget.describe(),
        };
        println!("{:<14} {:<16} {}", key.name(), key.label(), domain);
    }
    Ok(())
}
