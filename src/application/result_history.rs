// In-memory log of recent tool results
use crate::domain::tool::GeneratedResult;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Bounded, newest-first. Lives for the process lifetime only.
#[derive(Clone)]
pub struct ResultHistory {
    capacity: usize,
    entries: Arc<RwLock<VecDeque<GeneratedResult>>>,
}

impl ResultHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
        }
    }

    pub async fn record(&self, result: GeneratedResult) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.write().await;
        entries.push_front(result);
        entries.truncate(self.capacity);
    }

    pub async fn recent(&self, limit: usize) -> Vec<GeneratedResult> {
        let entries = self.entries.read().await;
        entries.iter().take(limit).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tool::ToolPayload;

    fn script(markdown: &str, timestamp: i64) -> GeneratedResult {
        GeneratedResult::new(
            ToolPayload::Script {
                markdown: markdown.to_string(),
            },
            timestamp,
        )
    }

    #[tokio::test]
    async fn test_newest_first() {
        let history = ResultHistory::new(10);
        history.record(script("one", 1)).await;
        history.record(script("two", 2)).await;

        let recent = history.recent(10).await;
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].content, "two");
        assert_eq!(recent[1].content, "one");
    }

    #[tokio::test]
    async fn test_capacity_drops_oldest() {
        let history = ResultHistory::new(2);
        for i in 0..5 {
            history.record(script(&i.to_string(), i)).await;
        }

        assert_eq!(history.len().await, 2);
        let contents: Vec<String> = history.recent(10).await.into_iter().map(|r| r.content).collect();
        assert_eq!(contents, vec!["4", "3"]);
    }

    #[tokio::test]
    async fn test_limit_and_zero_capacity() {
        let history = ResultHistory::new(5);
        history.record(script("a", 1)).await;
        history.record(script("b", 2)).await;
        assert_eq!(history.recent(1).await.len(), 1);

        let disabled = ResultHistory::new(0);
        disabled.record(script("a", 1)).await;
        assert_eq!(disabled.len().await, 0);
    }
}
