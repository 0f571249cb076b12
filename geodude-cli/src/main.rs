use anyhow::{Context, Result};
use geodude_core::{round_trip, GeocodeError, Geocoder, GoogleGeocoder};
use std::io::{self, Write};

mod cli;
mod output;

/// Exit code for usage errors and failed lookups
const EXIT_FAILURE: i32 = 2;

fn main() {
    let args = cli::parse_args();

    // RUST_LOG wins; otherwise warnings only, or debug with --verbose
    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let code = run(
        &args,
        build_geocoder,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    std::process::exit(code);
}

fn build_geocoder(args: &cli::Args) -> Result<GoogleGeocoder> {
    if args.api_key.is_none() {
        log::info!("No API key given (--api-key or GOOGLE_MAPS_API_KEY); the provider may refuse requests");
    }
    GoogleGeocoder::new(args.geocoder_config()).context("Failed to set up geocoding provider")
}

/// Assemble the query, round-trip it through the provider and render the
/// outcome. Returns the process exit code.
fn run<G, F>(args: &cli::Args, make_geocoder: F, out: &mut impl Write, err: &mut impl Write) -> i32
where
    G: Geocoder,
    F: FnOnce(&cli::Args) -> Result<G>,
{
    let Some(query) = args.query() else {
        // Nothing sensible left to report if stderr itself is gone
        output::write_usage(err).ok();
        return EXIT_FAILURE;
    };

    let outcome = make_geocoder(args).and_then(|geocoder| {
        let result = round_trip(&query, &geocoder)?;
        output::write_result(out, &result).context("Failed to write result")?;
        out.flush().context("Failed to write result")?;
        Ok(())
    });

    match outcome {
        Ok(()) => 0,
        Err(e) => {
            match e.downcast_ref::<GeocodeError>() {
                Some(geocode_err) => match geocode_err.stage() {
                    Some(stage) => log::debug!(
                        "{} failed for {:?}: {:?}",
                        stage,
                        query,
                        geocode_err.provider_error()
                    ),
                    None => log::debug!("Rejected query {:?}: {}", query, geocode_err),
                },
                None => log::debug!("Lookup for {:?} failed: {:?}", query, e),
            }
            writeln!(err, "{:#}", e).ok();
            EXIT_FAILURE
        }
    }
}
