use std::sync::Arc;

use rodio::{OutputStream, OutputStreamBuilder, Sink, cpal::BufferSize};

use super::error::AudioError;

pub struct PlaybackEngine {
    _stream: OutputStream,
    sink: Arc<Sink>,
}

impl PlaybackEngine {
    pub fn new() -> Result<Self, AudioError> {
        let stream = OutputStreamBuilder::from_default_device()
            .map_err(|e| AudioError::DeviceError(e.to_string()))?
            .with_buffer_size(BufferSize::Fixed(4096))
            .open_stream_or_fallback()
            .map_err(|e| AudioError::DeviceError(e.to_string()))?;
        let sink = Sink::connect_new(stream.mixer());

        Ok(Self {
            _stream: stream,
            sink: Arc::new(sink),
        })
    }

    pub fn sink(&self) -> Arc<Sink> {
        self.sink.clone()
    }

    pub fn pause(&self) {
        self.sink.pause();
    }

    pub fn play(&self) {
        self.sink.play();
    }

    pub fn stop(&self) {
        self.sink.stop();
    }
}
