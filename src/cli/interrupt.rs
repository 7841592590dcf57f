use std::{sync::atomic::Ordering, thread};

use otter_bench::runner::Interrupt;

/// Sets the flag on the first Ctrl-C, and exits on the second.
pub fn install(interrupt: Interrupt) {
    let spawned = thread::Builder::new()
        .name("interrupt".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    log::warn!("Ctrl-C will not be caught: {e}");
                    return;
                }
            };

            runtime.block_on(async {
                while tokio::signal::ctrl_c().await.is_ok() {
                    if interrupt.swap(true, Ordering::Relaxed) {
                        eprintln!("c Interrupted twice");
                        std::process::exit(130);
                    }
                    eprintln!("c Interrupted, waiting on running jobs");
                }
            });
        });

    if let Err(e) = spawned {
        log::warn!("Ctrl-C will not be caught: {e}");
    }
}
