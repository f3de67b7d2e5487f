/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of tyre-fitment.
 *
 * tyre-fitment is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * tyre-fitment is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with tyre-fitment. If not, see <https://www.gnu.org/licenses/>.
 */

mod error;
mod output;
mod render;
mod report;
mod settings;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use tracing::{debug, error, info};

use tyre_geometry::layout::{project, ProjectionConfig, View};
use tyre_geometry::{compare_tyres, derive_geometry, TyreGeometry, TyreSpec};

use crate::error::FitmentError;
use crate::output::OutputFolder;
use crate::render::{BitmapSurface, draw_layout, RenderStyle};
use crate::settings::Settings;

/// Work out tyre and wheel dimensions, draw them and compare fitments.
///
/// The first fitment is the baseline the others are compared against.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Fitments such as "17x7.5 205/45R17". Falls back to `fitments` in the settings file
    #[arg(value_name = "FITMENT")]
    fitments: Vec<String>,

    /// Settings file, created with the defaults if it doesn't exist
    #[arg(long, value_name = "FILE", default_value = Settings::CONFIG_FILENAME)]
    config: PathBuf,

    /// Folder to write images and the comparison to
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Don't draw any images
    #[arg(long)]
    no_images: bool,

    /// Don't write comparison.json
    #[arg(long)]
    no_comparison: bool,

    /// Rim lip allowance in inches
    #[arg(long, value_name = "INCHES")]
    rim_lip: Option<f64>,

    /// Bead seating allowance added to the rim width, in inches
    #[arg(long, value_name = "INCHES")]
    rim_width_additional: Option<f64>,

    /// Draw the side view with doubled sidewalls like older releases did
    #[arg(long)]
    double_sidewall: bool
}

impl Cli {
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(output) = &self.output {
            settings.output_folder = output.clone();
        }
        if self.no_images {
            settings.save_images = false;
        }
        if self.no_comparison {
            settings.save_comparison = false;
        }
        if let Some(lip) = self.rim_lip {
            settings.rim_diameter_lip = lip;
        }
        if let Some(additional) = self.rim_width_additional {
            settings.rim_width_additional = additional;
        }
        if self.double_sidewall {
            settings.side_view_double_sidewall = true;
        }
        if !self.fitments.is_empty() {
            settings.fitments = self.fitments.clone();
        }
    }
}

fn main() -> ExitCode {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, "tyre_fitment.log");
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }

    let cli = Cli::parse();
    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), FitmentError> {
    let mut settings = Settings::load(&cli.config)?;
    cli.apply_to(&mut settings);
    if settings.fitments.is_empty() {
        return Err(FitmentError::NoFitments(cli.config.display().to_string()));
    }

    let allowances = settings.allowances();
    let tyres = settings.fitments.iter()
        .map(|fitment| TyreSpec::from_fitment_str(fitment, allowances).map(|spec| derive_geometry(&spec)))
        .collect::<Result<Vec<TyreGeometry>, _>>()?;

    let rows = compare_tyres(&tyres)?;
    let table = report::comparison_table(&rows);
    info!("Comparison:\n{}", table);
    println!("{}", table);

    if !settings.save_images && !settings.save_comparison {
        return Ok(());
    }
    let output = OutputFolder::create(&settings.output_folder)?;
    if settings.save_comparison {
        output.write_comparison(&rows)?;
    }
    if settings.save_images {
        let style = RenderStyle::from_settings(&settings)?;
        let projection = settings.projection_config();
        for (idx, tyre) in tyres.iter().enumerate() {
            draw_views(tyre, &projection, &style, &output, idx == 0)?;
        }
    }
    Ok(())
}

fn draw_views(tyre: &TyreGeometry,
              projection: &ProjectionConfig,
              style: &RenderStyle,
              output: &OutputFolder,
              is_baseline: bool) -> Result<(), FitmentError> {
    debug!("{}: {}", tyre.label(), projection.pixel_dimensions(tyre));
    for view in View::ALL {
        let layout = project(view, tyre, projection);
        let mut surface = BitmapSurface::new(projection.canvas_width, projection.canvas_height, style.background_colour);
        draw_layout(&mut surface, &layout, tyre, style)?;
        surface.save(&output.image_path(view, tyre.spec()))?;
        if is_baseline {
            surface.save(&output.latest_image_path(view))?;
        }
    }
    Ok(())
}
