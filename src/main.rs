use photon_sync::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
use photon_sync::adapters::outbound::filesystem::FileSystemStore;
use photon_sync::adapters::outbound::network::PhotonFeedClient;
use photon_sync::application::dto::{UpdateRequest, UpdateSummary};
use photon_sync::application::use_cases::UpdateAdvisoriesUseCase;
use photon_sync::cli::Args;
use photon_sync::ports::outbound::ProgressReporter;
use photon_sync::shared::{ExitCode, Result};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_tracing();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<UpdateSummary> {
    let request = args.to_request();

    // Create adapters (Dependency Injection)
    let transport = PhotonFeedClient::new()?;
    let store = FileSystemStore::new();

    if args.quiet {
        sync(transport, store, SilentProgressReporter::new(), request)
    } else {
        sync(transport, store, StderrProgressReporter::new(), request)
    }
}

fn sync<PR: ProgressReporter>(
    transport: PhotonFeedClient,
    store: FileSystemStore,
    progress_reporter: PR,
    request: UpdateRequest,
) -> Result<UpdateSummary> {
    let use_case = UpdateAdvisoriesUseCase::new(transport, store, progress_reporter, request);
    use_case.execute()
}
