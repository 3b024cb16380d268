use std::io::Write;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner shown on stderr while the remote call is in flight.
pub struct AnimatedLogger {
    stop_sender: Option<oneshot::Sender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn start(message: String) -> Self {
        let (stop_tx, mut stop_rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut ticker = interval(Duration::from_millis(150));

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        eprint!("\r{} {} ", message, FRAMES[frame]);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % FRAMES.len();
                    }
                    _ = &mut stop_rx => break,
                }
            }
        });

        Self {
            stop_sender: Some(stop_tx),
            task_handle: Some(handle),
        }
    }

    pub async fn stop(&mut self, final_message: &str) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }

        eprintln!("\r\x1b[K{}", final_message);
        let _ = std::io::stderr().flush();
    }
}
