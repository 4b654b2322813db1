pub mod config;
pub mod metrics;
pub mod orchestrator;
pub mod persistence;
pub mod round;
pub mod searcher;
pub mod store;
pub mod testing;
pub mod words;

pub use config::{
    load_config, load_config_from_str, validate_config, CollectorConfig, Config, ConfigError,
    SanitizedConfig, SearchBackend, StoreConfig, TwitterConfig,
};
pub use orchestrator::{CollectionOrchestrator, OrchestratorError, RoundError, RunPhase, RunSummary};
pub use persistence::{create_persistence_queue, PersistenceHandle, PersistenceStats, PersistenceWriter};
pub use round::{plan_round, resolve_round, CollectionCursor, MatchRecord, RoundPlan, SearchRound};
pub use searcher::{
    obtain_bearer_token, ExtractionError, PostSearcher, RawPost, SearchError, SearchRequest,
    TwitterSearcher,
};
pub use store::{CollectionKind, CollectionStore, SqliteStore, StoreError, WordStore};
pub use words::{canonicalize, tokenize, Word, WordSequence, WordsError};
