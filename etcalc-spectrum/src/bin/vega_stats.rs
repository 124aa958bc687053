//! Diagnostic dump for a reference spectrum file
//!
//! Usage: vega-stats <path/to/vega_flux.json>
//!
//! Loads the spectrum, reports its support, and prints the flam flux
//! corresponding to Vega magnitude 0 at the center of the support.

use std::process::ExitCode;

use etcalc_units::{ConversionContext, UnitConverter};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: vega-stats <path/to/vega_flux.json>");
        return ExitCode::FAILURE;
    };

    let spectrum = match etcalc_spectrum::load(&path).await {
        Ok(spectrum) => spectrum,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("samples:  {}", spectrum.len());
    let Some((lower, upper)) = spectrum.support() else {
        println!("spectrum is empty");
        return ExitCode::SUCCESS;
    };
    println!("support:  {} .. {} Angstrom", lower, upper);

    let center = (lower + upper) / 2.0;
    let converter = UnitConverter::new(spectrum);
    let ctx = ConversionContext::new().with_wavelength(center);
    match converter.convert(0.0, "mag(vega)", "flam", &ctx) {
        Ok(Some(flam)) => {
            println!("mag(vega) 0 at {} Angstrom = {:e} flam", center, flam);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("error: conversion produced no value");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
