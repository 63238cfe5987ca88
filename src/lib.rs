//! Exact, minimum-literal two-level Quine-McCluskey Boolean minimizer.
//!
//! [`minimize`] is the sole entry point: a pure function from a Boolean
//! function description (minterms, don't-cares, variable count) to a minimum
//! two-level SOP/POS cover, the full prime-implicant set, and telemetry. It
//! does no I/O and holds no state across calls; everything else in this crate
//! (the CLI binary) is a collaborator built on top of it.

pub mod cancel;
pub mod chart;
pub mod cover;
pub mod cube;
pub mod error;
pub mod options;
pub mod pi_generator;
pub mod render;
pub mod telemetry;
pub mod variables;

use std::collections::BTreeSet;

pub use cube::Cube;
pub use error::MinimizeError;
pub use options::{OptimizationLevel, Options};
pub use render::Group;
pub use telemetry::{Counts, Timings};

/// A prime implicant's cube, rendered for a caller that doesn't want to work
/// with raw `(mask, value)` bitmasks directly.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CubeInfo {
    pub value: u16,
    pub mask: u16,
    pub literal_count: u32,
    pub expression: String,
}

impl CubeInfo {
    fn from_cube(cube: &Cube, n_vars: usize, variable_names: &[String]) -> Self {
        CubeInfo {
            value: cube.value,
            mask: cube.mask,
            literal_count: cube.literal_count(n_vars),
            expression: render::render_sop(std::slice::from_ref(cube), n_vars, variable_names),
        }
    }
}

/// One row of the full prime-implicant listing.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PrimeImplicantInfo {
    pub cube: CubeInfo,
    pub essential: bool,
    pub covers: Vec<u32>,
}

/// Everything [`minimize`] produces.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MinimizationResult {
    pub output_name: String,
    pub prime_implicants: Vec<PrimeImplicantInfo>,
    pub selected: Vec<CubeInfo>,
    pub minimal_sop: String,
    pub minimal_pos: String,
    pub canonical_sop: String,
    pub canonical_pos: String,
    pub groups: Vec<Group>,
    pub steps: Vec<String>,
    pub timings: Timings,
    pub counts: Counts,
    /// `false` only when `options.deadline_ms` elapsed before a minimum cover
    /// was proven; `selected` is then the best cover found so far, not
    /// necessarily minimum.
    pub is_minimal: bool,
}

/// The outcome of running the generate -> chart -> cover pipeline once over a
/// single on-set (used for both the SOP pass over `ones` and the POS pass
/// over `zeros`).
struct HalfResult {
    primes: Vec<Cube>,
    essential: Vec<usize>,
    selected: Vec<usize>,
    branch_and_bound_nodes: usize,
    cancelled: bool,
    pi_generation_ms: f64,
    chart_construction_ms: f64,
    cover_solve_ms: f64,
}

fn run_half(
    on_set: &[u16],
    dont_cares: &[u16],
    n_vars: usize,
    deadline: &cancel::Deadline,
    emit_steps: bool,
    label: &str,
    steps: &mut Vec<String>,
) -> Result<HalfResult, MinimizeError> {
    let mut sw = telemetry::Stopwatch::start();
    let mut local_steps = Vec::new();

    let primes = pi_generator::generate_prime_implicants_with_trace(
        on_set,
        dont_cares,
        &mut local_steps,
        &mut || deadline.is_exceeded(),
    );
    let pi_generation_ms = sw.lap_ms();

    let chart = chart::Chart::build(&primes, on_set)?;
    let chart_construction_ms = sw.lap_ms();

    let cover = cover::solve_chart(chart, &primes, n_vars, deadline.remaining());
    let cover_solve_ms = sw.lap_ms();

    if emit_steps {
        steps.extend(local_steps.into_iter().map(|s| format!("[{label}] {s}")));
        if cover.cancelled {
            steps.push(format!("[{label}] deadline exceeded during cover search"));
        }
    }

    Ok(HalfResult {
        primes,
        essential: cover.essential,
        selected: cover.selected,
        branch_and_bound_nodes: cover.branch_and_bound_nodes,
        cancelled: cover.cancelled,
        pi_generation_ms,
        chart_construction_ms,
        cover_solve_ms,
    })
}

/// Minimize the Boolean function described by `ones` (required true points) and
/// `dont_cares` (indifferent points) over `n_vars` Boolean variables, returning
/// an exact minimum-literal two-level SOP/POS cover plus the full prime
/// implicant set and solver telemetry.
///
/// `variable_names` supplies up to `n_vars` short identifiers; any missing
/// trailing names are filled in as `A, B, C, ...`. `output_name` is carried
/// through into the result unchanged, for a caller that wants to print
/// `output_name = minimal_sop`.
pub fn minimize(
    n_vars: usize,
    ones: &[u32],
    dont_cares: &[u32],
    variable_names: &[String],
    output_name: &str,
    options: Options,
) -> Result<MinimizationResult, MinimizeError> {
    if !(2..=15).contains(&n_vars) {
        return Err(MinimizeError::InvalidNVars { n_vars });
    }

    let universe = 1u32 << n_vars;
    for &m in ones.iter().chain(dont_cares.iter()) {
        if m >= universe {
            return Err(MinimizeError::InvalidMinterm { value: m, n_vars });
        }
    }

    let ones_set: BTreeSet<u16> = ones.iter().map(|&m| m as u16).collect();
    let dcs_set: BTreeSet<u16> = dont_cares.iter().map(|&m| m as u16).collect();
    if let Some(&overlap) = ones_set.intersection(&dcs_set).next() {
        return Err(MinimizeError::Overlap { value: overlap as u32 });
    }

    let names = variables::resolve_variable_names(n_vars, variable_names);
    let deadline = cancel::Deadline::from_millis(options.deadline_ms);

    let ones_vec: Vec<u16> = ones_set.iter().copied().collect();
    let dcs_vec: Vec<u16> = dcs_set.iter().copied().collect();
    let zeros_vec: Vec<u16> = (0u32..universe)
        .map(|m| m as u16)
        .filter(|m| !ones_set.contains(m) && !dcs_set.contains(m))
        .collect();

    let mut steps = Vec::new();
    let mut stopwatch = telemetry::Stopwatch::start();

    let sop = run_half(
        &ones_vec,
        &dcs_vec,
        n_vars,
        &deadline,
        options.emit_steps,
        "SOP",
        &mut steps,
    )?;

    let pos = if options.compute_pos {
        Some(run_half(
            &zeros_vec,
            &dcs_vec,
            n_vars,
            &deadline,
            options.emit_steps,
            "POS",
            &mut steps,
        )?)
    } else {
        None
    };

    stopwatch.lap_ms(); // reset the checkpoint to the start of the render stage

    let sop_selected_cubes: Vec<Cube> = sop.selected.iter().map(|&i| sop.primes[i].clone()).collect();
    let minimal_sop = render::render_sop(&sop_selected_cubes, n_vars, &names);
    let groups = render::groups(&sop_selected_cubes);

    let essential_set: BTreeSet<usize> = sop.essential.iter().copied().collect();
    let prime_implicants: Vec<PrimeImplicantInfo> = sop
        .primes
        .iter()
        .enumerate()
        .map(|(idx, cube)| {
            let mut covers = cube.covers.iter().map(|&m| m as u32).collect::<Vec<_>>();
            covers.sort_unstable();
            PrimeImplicantInfo {
                cube: CubeInfo::from_cube(cube, n_vars, &names),
                essential: essential_set.contains(&idx),
                covers,
            }
        })
        .collect();
    let selected: Vec<CubeInfo> = sop_selected_cubes
        .iter()
        .map(|c| CubeInfo::from_cube(c, n_vars, &names))
        .collect();

    let minimal_pos = match &pos {
        Some(pos) => {
            let pos_selected_cubes: Vec<Cube> =
                pos.selected.iter().map(|&i| pos.primes[i].clone()).collect();
            render::render_pos(&pos_selected_cubes, n_vars, &names)
        }
        None => String::new(),
    };
    let render_ms = stopwatch.lap_ms();

    let canonical_sop = render::canonical_sop(&ones_vec, &dcs_vec);
    let canonical_pos = render::canonical_pos(&zeros_vec, &dcs_vec);

    let is_minimal = !sop.cancelled && pos.as_ref().map_or(true, |p| !p.cancelled);

    let timings = Timings {
        pi_generation_ms: sop.pi_generation_ms
            + pos.as_ref().map_or(0.0, |p| p.pi_generation_ms),
        chart_construction_ms: sop.chart_construction_ms
            + pos.as_ref().map_or(0.0, |p| p.chart_construction_ms),
        cover_solve_ms: sop.cover_solve_ms + pos.as_ref().map_or(0.0, |p| p.cover_solve_ms),
        render_ms,
        total_ms: stopwatch.total_ms(),
    };
    let counts = Counts {
        prime_implicant_count: sop.primes.len(),
        essential_count: sop.essential.len(),
        selected_count: sop.selected.len(),
        branch_and_bound_nodes: sop.branch_and_bound_nodes
            + pos.as_ref().map_or(0, |p| p.branch_and_bound_nodes),
    };

    Ok(MinimizationResult {
        output_name: output_name.to_string(),
        prime_implicants,
        selected,
        minimal_sop,
        minimal_pos,
        canonical_sop,
        canonical_pos,
        groups,
        steps,
        timings,
        counts,
        is_minimal,
    })
}
