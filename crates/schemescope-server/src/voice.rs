//! Voice capture sessions
//!
//! A [`VoiceSession`] owns an open audio capture from the moment recording
//! starts. The capture is stopped exactly once: by [`VoiceSession::finish`],
//! by [`VoiceSession::cancel`], or when the session is dropped (for example
//! when the owning request is aborted).
//!
//! Capture front ends implement [`Microphone`] and [`Transcriber`] and hand
//! the session to [`SearchService::search_recording`]. The HTTP API skips
//! this step and accepts finished transcripts at `/v1/voice`.
//!
//! [`SearchService::search_recording`]: crate::search::SearchService::search_recording

use async_trait::async_trait;
use schemescope_core::{Error, Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// An in-progress recording
pub trait AudioCapture: Send {
    /// Stop recording, release the device, and return the captured audio
    fn stop(&mut self) -> Result<Vec<u8>>;
}

/// Opens audio captures
pub trait Microphone: Send + Sync {
    fn open(&self) -> Result<Box<dyn AudioCapture>>;
}

/// Turns captured audio into a transcript
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: Vec<u8>) -> Result<String>;
}

/// A recording that always releases its capture
pub struct VoiceSession {
    capture: Option<Box<dyn AudioCapture>>,
    transcriber: Arc<dyn Transcriber>,
}

impl VoiceSession {
    /// Open the microphone and start recording
    pub fn start(microphone: &dyn Microphone, transcriber: Arc<dyn Transcriber>) -> Result<Self> {
        let capture = microphone
            .open()
            .map_err(|e| Error::voice(format!("could not access microphone: {e}")))?;
        debug!("Voice capture started");

        Ok(Self {
            capture: Some(capture),
            transcriber,
        })
    }

    pub fn is_recording(&self) -> bool {
        self.capture.is_some()
    }

    /// Stop recording and transcribe what was captured
    pub async fn finish(mut self) -> Result<String> {
        let audio = self.stop_capture()?;
        debug!("Voice capture stopped with {} bytes", audio.len());
        self.transcriber.transcribe(audio).await
    }

    /// Abandon the recording
    pub fn cancel(mut self) {
        if let Err(e) = self.stop_capture() {
            warn!("Failed to stop cancelled voice capture: {}", e);
        }
    }

    fn stop_capture(&mut self) -> Result<Vec<u8>> {
        match self.capture.take() {
            Some(mut capture) => capture.stop(),
            None => Err(Error::voice("capture already stopped")),
        }
    }
}

impl Drop for VoiceSession {
    fn drop(&mut self) {
        if let Some(mut capture) = self.capture.take() {
            debug!("Releasing voice capture on drop");
            if let Err(e) = capture.stop() {
                warn!("Failed to stop voice capture: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct CountingCapture {
        stops: Arc<AtomicU32>,
    }

    impl AudioCapture for CountingCapture {
        fn stop(&mut self) -> Result<Vec<u8>> {
            self.stops.fetch_add(1, Ordering::SeqCst);
            Ok(vec![0u8; 16])
        }
    }

    struct MockMicrophone {
        stops: Arc<AtomicU32>,
        available: bool,
    }

    impl Microphone for MockMicrophone {
        fn open(&self) -> Result<Box<dyn AudioCapture>> {
            if !self.available {
                return Err(Error::voice("permission denied"));
            }
            Ok(Box::new(CountingCapture {
                stops: self.stops.clone(),
            }))
        }
    }

    struct FixedTranscriber {
        text: Option<&'static str>,
    }

    #[async_trait]
    impl Transcriber for FixedTranscriber {
        async fn transcribe(&self, _audio: Vec<u8>) -> Result<String> {
            self.text
                .map(str::to_string)
                .ok_or_else(|| Error::voice("transcription failed"))
        }
    }

    fn microphone() -> (MockMicrophone, Arc<AtomicU32>) {
        let stops = Arc::new(AtomicU32::new(0));
        (
            MockMicrophone {
                stops: stops.clone(),
                available: true,
            },
            stops,
        )
    }

    #[tokio::test]
    async fn test_finish_stops_once_and_transcribes() {
        let (mic, stops) = microphone();
        let session =
            VoiceSession::start(&mic, Arc::new(FixedTranscriber { text: Some("Ayushman Bharat") }))
                .unwrap();
        assert!(session.is_recording());

        let transcript = session.finish().await.unwrap();
        assert_eq!(transcript, "Ayushman Bharat");
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_transcription_still_releases_capture() {
        let (mic, stops) = microphone();
        let session = VoiceSession::start(&mic, Arc::new(FixedTranscriber { text: None })).unwrap();

        assert!(session.finish().await.is_err());
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cancel_and_drop_release_capture() {
        let (mic, stops) = microphone();
        let transcriber: Arc<dyn Transcriber> = Arc::new(FixedTranscriber { text: None });

        VoiceSession::start(&mic, transcriber.clone()).unwrap().cancel();
        assert_eq!(stops.load(Ordering::SeqCst), 1);

        {
            let _session = VoiceSession::start(&mic, transcriber).unwrap();
        }
        assert_eq!(stops.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unavailable_microphone() {
        let stops = Arc::new(AtomicU32::new(0));
        let mic = MockMicrophone {
            stops,
            available: false,
        };
        let err = VoiceSession::start(&mic, Arc::new(FixedTranscriber { text: None })).err();
        assert!(matches!(err, Some(Error::Voice(_))));
    }
}
