//! Hero typing effect.

use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::TimeoutFuture;
use portfolio_shared::typing::{Typewriter, INITIAL_DELAY_MS};
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

/// Running animation; dropping it stops the loop and clears the pending timer.
pub struct TypingAnimator {
    abort: AbortHandle,
}

impl TypingAnimator {
    /// Starts typing into `target` after the initial delay.
    pub fn start(target: Element, mut typewriter: Typewriter) -> Self {
        let (abort, registration) = AbortHandle::new_pair();
        let run = async move {
            TimeoutFuture::new(INITIAL_DELAY_MS).await;
            loop {
                let frame = typewriter.step();
                target.set_text_content(Some(&frame.text));
                TimeoutFuture::new(frame.next_delay_ms).await;
            }
        };
        spawn_local(async move {
            let _ = Abortable::new(run, registration).await;
        });
        Self {
            abort,
        }
    }

    /// Stops the loop; the text stays as last rendered.
    pub fn stop(&self) {
        self.abort.abort();
    }
}

impl Drop for TypingAnimator {
    fn drop(&mut self) {
        self.stop();
    }
}
