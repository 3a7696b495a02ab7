// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgGroup, ArgMatches};
use failure::Error;
use log::{info, LevelFilter};
use seamcarver::{Orientation, SeamCarver};
use std::process;

fn count(matches: &ArgMatches, name: &str) -> Result<Option<u32>, Error> {
    match matches.value_of(name) {
        None => Ok(None),
        Some(value) => Ok(Some(value.parse()?)),
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let image = image::open(input)?.to_rgb();
    let mut carver = SeamCarver::new(&image)?;
    info!("{}: {}x{}", input, carver.width(), carver.height());

    if let Some(path) = matches.value_of("energy") {
        carver.energy_picture().save(path)?;
        info!("energy map written to {}", path);
    }

    if let Some(n) = count(matches, "vertical")? {
        carver.remove_seams(Orientation::Vertical, n)?;
    }
    if let Some(n) = count(matches, "horizontal")? {
        carver.remove_seams(Orientation::Horizontal, n)?;
    }

    let new_width = count(matches, "width")?.unwrap_or_else(|| carver.width());
    let new_height = count(matches, "height")?.unwrap_or_else(|| carver.height());
    carver.carve(new_width, new_height)?;

    info!("{}: {}x{}", output, carver.width(), carver.height());
    carver.picture().save(output)?;
    Ok(())
}

fn main() {
    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the format follows the extension")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("vertical")
                .long("vertical")
                .takes_value(true)
                .value_name("N")
                .help("Remove N vertical seams (columns)"),
        )
        .arg(
            Arg::with_name("horizontal")
                .long("horizontal")
                .takes_value(true)
                .value_name("N")
                .help("Remove N horizontal seams (rows)"),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .value_name("W")
                .help("Carve down to this width"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .value_name("H")
                .help("Carve down to this height"),
        )
        .group(
            ArgGroup::with_name("resize")
                .args(&["vertical", "horizontal", "width", "height"])
                .multiple(true)
                .required(true),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .takes_value(true)
                .value_name("PATH")
                .help("Also write the energy map of the input as a grayscale image"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more; repeat for more detail"),
        )
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    if let Err(err) = run(&matches) {
        eprintln!("seamcarve: {}", err);
        process::exit(1);
    }
}
