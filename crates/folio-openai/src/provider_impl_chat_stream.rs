use folio_core::error::{FolioError, Result};
use folio_core::provider::{CompletionParameters, CompletionProvider, FragmentStream, OpenStream};
use futures_core::Stream;
use futures_util::StreamExt;

use crate::OpenAiAdapter;
use crate::api_v1::ChatCompletionRequest;
use crate::client::ChunkStream;

impl CompletionProvider for OpenAiAdapter {
    fn request_streaming_completion<'p>(&'p self, params: CompletionParameters) -> OpenStream<'p> {
        let client = self.client.clone();

        Box::pin(async move {
            let request = ChatCompletionRequest::from(params);
            let chunks = client
                .chat_completion_stream(request)
                .await
                .map_err(FolioError::from)?;

            Ok(Box::pin(text_fragments(chunks)) as FragmentStream)
        })
    }
}

/// Keep only the text of each chunk; chunks without content (role header,
/// finish marker) are dropped.
fn text_fragments(chunks: ChunkStream) -> impl Stream<Item = Result<String>> + Send + 'static {
    chunks.filter_map(|chunk| async move {
        match chunk {
            Ok(chunk) => chunk.into_text().map(Ok),
            Err(err) => Some(Err(FolioError::from(err))),
        }
    })
}
