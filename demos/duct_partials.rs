//! Checks the duct loss relations against finite differences.
//!
//! Evaluates a 2 % pressure loss on a 5 psia inlet and a square-law Mach loss
//! map at design with an inlet Mach number of 0.5, then prints each analytic
//! partial next to its central-difference estimate.
//!
//! Run with `cargo run --example duct_partials`.

use twine_cycle::support::{
    constraint::NonNegative,
    flow::{MachLossMap, PressureLoss},
    partials::{PartialsCheck, PartialsCheckConfig, check_partials},
};
use uom::si::{
    f64::{Pressure, Ratio},
    pressure::{pascal, psi},
    ratio::ratio,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = PartialsCheckConfig::default();

    let pt_in = Pressure::new::<psi>(5.0);
    let dpqp = Ratio::new::<ratio>(0.02);
    let mach_in = Ratio::new::<ratio>(0.5);

    let pt_out = PressureLoss.outlet_pressure(pt_in, dpqp);
    println!("Pt_out = {:.4} psia", pt_out.get::<psi>());
    report(
        "p_loss",
        "Pt_out",
        &check_partials(
            &PressureLoss,
            &[pt_in.get::<pascal>(), dpqp.get::<ratio>()],
            &config,
        ),
    );

    let map = MachLossMap::design(NonNegative::new(2.0)?);
    let scalar = map.evaluate(dpqp, mach_in);
    println!("s_dPqP = {:.6}", scalar.get::<ratio>());
    report(
        "loss",
        "s_dPqP",
        &check_partials(&map, &[dpqp.get::<ratio>(), mach_in.get::<ratio>()], &config),
    );

    Ok(())
}

fn report<const N: usize>(component: &str, output: &str, check: &PartialsCheck<N>) {
    println!("{component}:");
    for comparison in &check.comparisons {
        println!(
            "  d({output})/d({:<5})  analytic {:>14.6e}  fd {:>14.6e}  rel err {:.2e}",
            comparison.input,
            comparison.analytic,
            comparison.finite_difference,
            comparison.relative_error(),
        );
    }
}
