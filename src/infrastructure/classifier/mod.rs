mod classifier_chain_factory;
mod remote_classifier;

pub use classifier_chain_factory::{ClassifierChainFactory, ClassifierChainFactoryError};
pub use remote_classifier::{DEFAULT_MAX_INPUT_CHARS, RemoteClassifier};
