use scout_core::RunReport;
use scout_logging::scout_info;

use crate::DiscoveryPipeline;

/// Drive a pipeline to completion from synchronous code.
///
/// Builds the async runtime, wires Ctrl-C to the pipeline's cancellation
/// token, and blocks until the report is ready. Partial results found
/// before a Ctrl-C are still returned.
pub fn run_blocking(pipeline: DiscoveryPipeline, listing_url: &str) -> RunReport {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");

    runtime.block_on(async {
        let cancel = pipeline.cancellation_token();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                scout_info!("interrupt received, cancelling discovery run");
                cancel.cancel();
            }
        });

        pipeline.run(listing_url).await
    })
}
