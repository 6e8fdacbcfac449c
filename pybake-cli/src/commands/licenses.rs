//! `pybake licenses`

use anyhow::Result;
use clap::Args;
use tabled::{Table, Tabled};

use pybake_core::LicenseKind;

/// List the supported license choices.
#[derive(Args, Debug)]
pub struct LicensesArgs {}

#[derive(Tabled)]
struct LicenseRow {
    #[tabled(rename = "Choice")]
    choice: String,
    #[tabled(rename = "SPDX id")]
    spdx: String,
    #[tabled(rename = "LICENSE file")]
    license_file: String,
}

impl LicensesArgs {
    pub fn run(self) -> Result<()> {
        let rows: Vec<LicenseRow> = LicenseKind::all()
            .iter()
            .map(|kind| LicenseRow {
                choice: kind.to_string(),
                spdx: kind.spdx_id().unwrap_or("-").to_string(),
                license_file: if kind.is_open_source() { "yes" } else { "no" }.to_string(),
            })
            .collect();
        println!("{}", Table::new(rows));
        Ok(())
    }
}
