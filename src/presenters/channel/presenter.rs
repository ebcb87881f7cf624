use crate::controllers::pipeline::events::render_event::RenderEvent;
use crate::controllers::pipeline::ports::presenter_port::PipelinePresenterPort;
use std::sync::mpsc::{self, Receiver, Sender};

/// Forwards pipeline events to an mpsc receiver. Events published after the
/// receiver is dropped are discarded.
pub struct ChannelPresenter {
    sender: Sender<RenderEvent>,
}

impl ChannelPresenter {
    #[must_use]
    pub fn new() -> (Self, Receiver<RenderEvent>) {
        let (sender, receiver) = mpsc::channel();

        (Self { sender }, receiver)
    }
}

impl PipelinePresenterPort for ChannelPresenter {
    fn present(&self, event: RenderEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::pipeline::errors::render_error::RenderError;

    #[test]
    fn test_forwards_events_in_order() {
        let (presenter, receiver) = ChannelPresenter::new();

        for generation in 1..=3 {
            presenter.present(RenderEvent::Error(RenderError {
                generation,
                message: "boom".to_string(),
            }));
        }

        let generations: Vec<u64> = receiver.try_iter().map(|e| e.generation()).collect();
        assert_eq!(generations, vec![1, 2, 3]);
    }

    #[test]
    fn test_dropped_receiver_is_ignored() {
        let (presenter, receiver) = ChannelPresenter::new();
        drop(receiver);

        presenter.present(RenderEvent::Error(RenderError {
            generation: 1,
            message: "nobody listening".to_string(),
        }));
    }
}
