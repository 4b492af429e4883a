use anyhow::Result;
use polemap::{filter, read_rows_csv, ColumnGroups};

use crate::cli::{Cli, InspectArgs};

pub fn run(cli: &Cli, args: &InspectArgs) -> Result<()> {
    let table = read_rows_csv(&args.input)?;
    let groups = ColumnGroups::detect(table.columns())?;

    println!("Rows: {}", table.len());
    println!("Column groups:");
    println!("  - MR level: {}", groups.mr_levels.join(", "));
    println!("  - MR cost: {}", groups.mr_costs.join(", "));
    println!("  - warnings: {}", groups.warnings.join(", "));
    println!("  - companies: {}", groups.companies.join(", "));

    let stats = filter(table.rows(), &groups, args.view.into()).stats;
    println!("Filter ({:?} view):", args.view);
    println!("  - copies: {}", stats.copies);
    println!("  - not poles: {}", stats.not_pole);
    println!("  - missing coordinates: {}", stats.missing_coords);
    println!("  - invalid SCID: {}", stats.bad_scid);
    println!("  - superseded by PLA: {}", stats.superseded);
    println!("  - PLA jobs hidden: {}", stats.pla_excluded);
    println!("  - excluded companies: {}", stats.excluded_company);
    println!("Kept: {}", stats.kept);

    if cli.verbose > 0 { eprintln!("[inspect] {:?}", stats); }
    Ok(())
}
