use idguard::{cli, config, IdguardError};

fn main() {
    // Install global collector configured based on IDGUARD_LOG env var.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env(
            config::env::LOG_DIRECTIVE,
        ))
        .with_target(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_thread_ids(true)
        .init();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .on_thread_start(|| tracing::trace!("thread start"))
        .on_thread_stop(|| tracing::trace!("thread stop"))
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("build runtime {}", err);
            std::process::exit(1);
        }
    };

    runtime.block_on(async {
        run().await;
    })
}

async fn run() {
    if let Err(err) = run_inner().await {
        let code = match err {
            IdguardError::Auth(_) => 2,
            _ => {
                eprintln!("{}", err);
                1
            }
        };
        std::process::exit(code);
    };
}

async fn run_inner() -> idguard::Result<()> {
    let cli::IdguardCommand { session, command } = cli::parse();

    command.run(session).await
}
