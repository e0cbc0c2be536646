use anyhow::Result;
use async_trait::async_trait;
use lectern::prelude::*;
use lectern::{
    ArticleStore, BackendError, CounterField, OpenAiBackend, RemoteUpdateError, SummaryBackend,
};
use lectern::summarize::SummaryRequest;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-process article store standing in for the remote backend.
struct DemoArticleStore {
    counters: Mutex<HashMap<String, Counters>>,
}

impl DemoArticleStore {
    fn new() -> Self {
        Self {
            counters: Mutex::new(HashMap::new()),
        }
    }

    fn counters_for(&self, article_id: &str) -> Counters {
        self.counters
            .lock()
            .unwrap()
            .get(article_id)
            .copied()
            .unwrap_or_default()
    }
}

#[async_trait]
impl ArticleStore for DemoArticleStore {
    async fn update_counter(
        &self,
        article_id: &str,
        field: CounterField,
        value: u64,
    ) -> std::result::Result<(), RemoteUpdateError> {
        let mut counters = self.counters.lock().unwrap();
        let entry = counters.entry(article_id.to_string()).or_default();
        match field {
            CounterField::Likes => entry.likes = value,
            CounterField::Dislikes => entry.dislikes = value,
            CounterField::Views => entry.views = value,
        }
        Ok(())
    }
}

/// Offline backend used when no API key is configured.
struct CannedBackend;

#[async_trait]
impl SummaryBackend for CannedBackend {
    async fn generate(
        &self,
        request: &SummaryRequest,
    ) -> std::result::Result<String, BackendError> {
        Ok(format!(
            "(canned) A {}-character article, summarized in two sentences. \
             Set OPENAI_API_KEY for a real summary.",
            request.text.chars().count()
        ))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("Lectern Engagement Core - Simple Example");
    println!("=========================================\n");

    // 1. Wire the core
    println!("1. Building the engagement core...");
    let remote = Arc::new(DemoArticleStore::new());
    let store = Arc::new(MemoryStore::new());

    let mut builder = EngagementBuilder::new()
        .key_value_store(store.clone())
        .article_store(remote.clone());
    builder = match std::env::var("OPENAI_API_KEY") {
        Ok(key) => builder.summary_backend(Arc::new(OpenAiBackend::new(key)?)),
        Err(_) => builder.summary_backend(Arc::new(CannedBackend)),
    };
    let engagement = builder.build()?;
    println!("   ✓ Ready (session {})\n", store.session_id());

    let article = Article::new("art-42", "The Future of Artificial Intelligence")
        .with_category("AI");

    // 2. Register a view
    println!("2. Registering a view...");
    let baseline = remote.counters_for(&article.id);
    let view = engagement
        .views()
        .register_view(&article.id, baseline.views)
        .await?;
    println!("   ✓ Views: {} (counted: {})", view.views, view.counted);

    let repeat = engagement
        .views()
        .register_view(&article.id, view.views)
        .await?;
    println!(
        "   ✓ Repeat render in same session: {} (counted: {})\n",
        repeat.views, repeat.counted
    );

    // 3. React to the article
    println!("3. Toggling reactions...");
    let counts = remote.counters_for(&article.id);
    let disliked = engagement
        .reactions()
        .toggle_dislike(&article.id, ReactionCounts::new(counts.likes, counts.dislikes))
        .await?;
    println!(
        "   ✓ After dislike: {} likes / {} dislikes ({:?})",
        disliked.counts.likes, disliked.counts.dislikes, disliked.reaction
    );

    let liked = engagement
        .reactions()
        .toggle_like(&article.id, disliked.counts)
        .await?;
    println!(
        "   ✓ After switching to like: {} likes / {} dislikes ({:?})\n",
        liked.counts.likes, liked.counts.dislikes, liked.reaction
    );

    // 4. Summarize the article body
    println!("4. Summarizing...");
    let body = "Artificial intelligence has moved from research labs into \
        everyday products over the last decade. Language models now draft \
        emails, summarize documents, and answer questions, while policy \
        makers debate how to govern systems whose capabilities keep \
        compounding year over year.";
    let summary = engagement.summarizer().summarize(body).await?;
    println!("   ✓ Summary: {}\n", summary);

    // 5. End the session; views count again, reactions persist
    println!("5. Ending the session...");
    store.end_session();
    let counts = remote.counters_for(&article.id);
    let view = engagement
        .views()
        .register_view(&article.id, counts.views)
        .await?;
    println!(
        "   ✓ New session view: {} (counted: {})",
        view.views, view.counted
    );
    let reaction = engagement.reactions().reaction_for(&article.id)?;
    println!("   ✓ Reaction survived the session: {:?}", reaction);

    Ok(())
}
