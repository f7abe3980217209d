//! # Mural calendar tool
#![warn(missing_docs)]
//!
//! Generates one printable SVG page per month of a year: a 7×5 day grid
//! with the neighboring months' days filled in, plus mini reference
//! calendars in the header band.

mod cli;

use almanac::grid::layout_month;
use almanac::mini::layout_mini;
use almanac::year::{MonthSlice, YearSpec};
use color_eyre::eyre::{self, bail, WrapErr};
use log::info;
use mural_svg::document::Stylesheet;
use mural_svg::page::{render_month, MiniMonth, MonthContext};

use cli::opt::Options;
use cli::script::{CalScript, DEFAULT_MONTH_NAMES};

fn load_script(opt: &Options) -> eyre::Result<Option<CalScript>> {
    let path = match &opt.script {
        Some(path) => path,
        None => return Ok(None),
    };
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read calendar script `{}`", path.display()))?;
    let script: CalScript =
        ron::from_str(&text).wrap_err("Failed to parse calendar script")?;
    Ok(Some(script))
}

fn year_spec(script: Option<&CalScript>, opt: &Options) -> eyre::Result<YearSpec> {
    let mut spec = match (script, opt.year) {
        (Some(script), _) => {
            let mut spec = match script.start {
                Some(start) => YearSpec::new(script.year, start),
                None => YearSpec::builtin(script.year)?,
            };
            spec.holidays = script.holidays.clone();
            spec
        }
        (None, Some(year)) => YearSpec::builtin(year)?,
        (None, None) => bail!("Pass a calendar script or `--year`"),
    };
    spec.validate_holidays()?;
    spec.holidays.sort_by_key(|h| (h.month, h.day));
    Ok(spec)
}

fn month_names(script: Option<&CalScript>) -> eyre::Result<Vec<String>> {
    match script.and_then(|s| s.names.as_ref()) {
        Some(names) => {
            if names.len() != 12 {
                bail!("Expected 12 month names, got {}", names.len());
            }
            Ok(names.clone())
        }
        None => Ok(DEFAULT_MONTH_NAMES.iter().map(|&n| n.to_string()).collect()),
    }
}

fn mini_month<'a>(names: &'a [String], slices: &[MonthSlice], month: usize) -> MiniMonth<'a> {
    MiniMonth {
        name: &names[month],
        layout: layout_mini(slices[month].days_in_month, slices[month].start),
    }
}

fn main() -> eyre::Result<()> {
    let opt: Options = cli::init()?;

    let script = load_script(&opt)?;
    let spec = year_spec(script.as_ref(), &opt)?;
    let names = month_names(script.as_ref())?;
    let style = script
        .as_ref()
        .and_then(|s| s.style.clone())
        .unwrap_or_default();

    let stylesheet = match &opt.font {
        Some(path) => Stylesheet::with_embedded_font(path)
            .wrap_err_with(|| format!("Failed to embed font `{}`", path.display()))?,
        None => Stylesheet::default(),
    };

    std::fs::create_dir_all(&opt.out)
        .wrap_err_with(|| format!("Failed to create output folder `{}`", opt.out.display()))?;

    let metrics = script
        .as_ref()
        .and_then(|s| s.metrics)
        .unwrap_or_default();
    let slices: Vec<MonthSlice> = spec.months().collect();

    for (month, slice) in slices.iter().enumerate() {
        let layout = layout_month(slice);
        let ctx = MonthContext {
            title: &names[month],
            year: spec.year,
            layout: &layout,
            mini_prev: month
                .checked_sub(1)
                .map(|prev| mini_month(&names, &slices, prev)),
            mini_next: slices
                .get(month + 1)
                .map(|_| mini_month(&names, &slices, month + 1)),
            style: &style,
            metrics,
        };

        let doc = render_month(&ctx, &stylesheet);
        let path = opt.out.join(format!("month_{:02}.svg", month));
        doc.save(&path)
            .wrap_err_with(|| format!("Failed to write `{}`", path.display()))?;
        info!("Generated `{}`", path.display());
    }

    Ok(())
}
