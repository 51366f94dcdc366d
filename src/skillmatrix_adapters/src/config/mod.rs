pub mod settings;

pub use settings::{
    ApplicationSettings, AuthSettings, DatabaseSettings, EmailClientSettings, Settings,
};
