//! Lazy chunk sequence over a live streaming response body.

use std::pin::Pin;
use std::task::{Context, Poll};

use async_stream::try_stream;
use bytes::Bytes;
use futures::{Stream, StreamExt};

use crate::core::error::GenError;
use crate::core::types::StreamChunk;
use crate::provider::wire;

/// Pull-driven sequence of [`StreamChunk`]s from one streaming call.
///
/// The underlying network read only advances when the consumer asks for the
/// next chunk, and chunks are delivered in the exact order they arrive. The
/// sequence ends with the provider's final marker or when the connection
/// closes; a mid-stream failure surfaces as an `Err` on the pull that
/// discovers it, and chunks already yielded stay valid. Dropping the stream
/// before the end drops the connection with it. Not restartable — a new
/// call regenerates from the start.
pub struct CompletionStream {
    inner: Pin<Box<dyn Stream<Item = Result<StreamChunk, GenError>> + Send>>,
}

impl CompletionStream {
    pub(crate) fn new<S, E>(bytes: S) -> Self
    where
        S: Stream<Item = Result<Bytes, E>> + Send + 'static,
        E: std::fmt::Display + Send,
    {
        let inner = try_stream! {
            let mut bytes = Box::pin(bytes);
            let mut buffer: Vec<u8> = Vec::new();
            let mut finished = false;

            while !finished {
                let next = bytes.next().await;
                let Some(chunk) = next else {
                    break;
                };
                let chunk =
                    chunk.map_err(|e| GenError::Transient(format!("stream interrupted: {e}")))?;
                buffer.extend_from_slice(&chunk);

                // Events are newline-delimited; a network chunk may carry
                // part of an event or several at once.
                while let Some(pos) = buffer.iter().position(|&b| b == b'\n') {
                    let line: Vec<u8> = buffer.drain(..=pos).collect();
                    match decode_line(&line)? {
                        LineEvent::Skip => {}
                        LineEvent::Done => {
                            finished = true;
                            break;
                        }
                        LineEvent::Chunk(chunk) => {
                            let is_final = chunk.is_final;
                            yield chunk;
                            if is_final {
                                finished = true;
                                break;
                            }
                        }
                    }
                }
            }

            if !finished {
                // Connection closed without a terminator; flush a trailing
                // unterminated event if one is buffered.
                if let LineEvent::Chunk(chunk) = decode_line(&buffer)? {
                    yield chunk;
                }
            }
        };

        Self {
            inner: Box::pin(inner),
        }
    }
}

impl std::fmt::Debug for CompletionStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionStream").finish_non_exhaustive()
    }
}

impl Stream for CompletionStream {
    type Item = Result<StreamChunk, GenError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().inner.as_mut().poll_next_unpin(cx)
    }
}

enum LineEvent {
    Skip,
    Done,
    Chunk(StreamChunk),
}

fn decode_line(line: &[u8]) -> Result<LineEvent, GenError> {
    let line = std::str::from_utf8(line)
        .map_err(|e| GenError::ResponseParse(format!("stream is not valid UTF-8: {e}")))?
        .trim();

    let Some(data) = line.strip_prefix("data:") else {
        return Ok(LineEvent::Skip);
    };
    let data = data.trim();

    if data == "[DONE]" {
        return Ok(LineEvent::Done);
    }
    wire::parse_stream_event(data).map(LineEvent::Chunk)
}
