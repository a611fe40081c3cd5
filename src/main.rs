//! Velocity transformations of a DNS case
//!
//! Select the case below, then
//!
//! cargo run --release
//!
//! Set `RUST_LOG=debug` for more output.
use std::path::Path;
use velotrans::io::{read_case, DnsCase};
use velotrans::logger::init_logging;
use velotrans::plot::{render_figure, Panel};
use velotrans::reference::reference_curves;
use velotrans::transform::{Transform, VelocityTransform};
use velotrans::Result;

/// Case to process
const CASE: DnsCase = DnsCase::ConstReTauStar;

/// Directory holding the case files
const DATA_DIR: &str = "data";

/// Suffix of the figure file, prefixed with the case name
const FIGURE_SUFFIX: &str = "_velocity_transforms.png";

fn main() {
    init_logging(None);
    if let Err(e) = run(CASE) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(case: DnsCase) -> Result<()> {
    log::info!("Case: {}", case);
    let data = read_case(Path::new(DATA_DIR).join(case.file_name()))?;

    // Report
    println!("{}", data.params);
    println!("{}", data.header);

    let mut panels = Vec::with_capacity(Transform::ALL.len());
    for transform in Transform::ALL.iter() {
        let panel = Panel::new(transform, &data)?;
        log::info!(
            "{:>14}: max deviation from DNS file {:.3e}",
            transform.name(),
            panel.deviation()?
        );
        panels.push(panel);
    }

    let reference = reference_curves();
    render_figure(format!("{}{}", case, FIGURE_SUFFIX), &panels, &reference)
}
