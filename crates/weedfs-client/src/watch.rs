//! Cursor-tracking wrapper around a metadata subscription.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use weedfs_proto::filer::SubscribeMetadataResponse;

use crate::transport::{MetadataStream, TransportError};

/// A live metadata subscription with a resume cursor.
///
/// Yields events exactly as the server streams them and remembers the
/// timestamp of the last event it handed out. When the stream ends or
/// errors, the consumer re-subscribes with [`WatchStream::cursor_ns`] to
/// continue where it left off; no reconnection happens inside this type.
pub struct WatchStream {
    inner: MetadataStream,
    cursor_ns: i64,
}

impl WatchStream {
    pub(crate) fn new(inner: MetadataStream, since_ns: i64) -> Self {
        Self {
            inner,
            cursor_ns: since_ns,
        }
    }

    /// Timestamp of the last event yielded, or the initial `since_ns` when
    /// nothing has been yielded yet. Suitable as the `since_ns` of a fresh
    /// subscription.
    pub fn cursor_ns(&self) -> i64 {
        self.cursor_ns
    }
}

impl Stream for WatchStream {
    type Item = Result<SubscribeMetadataResponse, TransportError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let polled = this.inner.as_mut().poll_next(cx);
        if let Poll::Ready(Some(Ok(event))) = &polled {
            this.cursor_ns = event.ts_ns;
        }
        polled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn event(ts_ns: i64) -> SubscribeMetadataResponse {
        SubscribeMetadataResponse {
            directory: "/data".into(),
            ts_ns,
            ..SubscribeMetadataResponse::default()
        }
    }

    #[tokio::test]
    async fn test_cursor_tracks_last_event() {
        let inner: MetadataStream =
            Box::pin(futures::stream::iter(vec![Ok(event(5)), Ok(event(9))]));
        let mut watch = WatchStream::new(inner, 1);
        assert_eq!(watch.cursor_ns(), 1);

        watch.next().await.unwrap().unwrap();
        assert_eq!(watch.cursor_ns(), 5);

        watch.next().await.unwrap().unwrap();
        assert_eq!(watch.cursor_ns(), 9);

        assert!(watch.next().await.is_none());
        assert_eq!(watch.cursor_ns(), 9);
    }

    #[tokio::test]
    async fn test_errors_do_not_advance_cursor() {
        let inner: MetadataStream = Box::pin(futures::stream::iter(vec![
            Ok(event(5)),
            Err(TransportError::ConnectionClosed),
        ]));
        let mut watch = WatchStream::new(inner, 0);

        watch.next().await.unwrap().unwrap();
        assert_eq!(watch.cursor_ns(), 5);

        assert!(watch.next().await.unwrap().is_err());
        assert_eq!(watch.cursor_ns(), 5);
    }
}
