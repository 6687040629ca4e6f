use super::{ConfigError, SerializableConfig};
use std::path::Path;
use tokio::fs::read_to_string;

/// Reads a configuration file.
pub async fn read_config(path: &Path) -> Result<SerializableConfig, ConfigError> {
    Ok(toml::from_str(&read_to_string(path).await?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;
    use tokio::fs::write;
    use url::Url;

    #[tokio::test]
    async fn read() {
        let directory = tempdir().unwrap();
        let file = directory.path().join("eslrest.toml");

        write(
            &file,
            indoc! {r#"
                base_url = "https://sandbox.example.com/api"
                api_token = "Zm9vOmJhcg=="
            "#},
        )
        .await
        .unwrap();

        assert_eq!(
            read_config(&file).await.unwrap(),
            SerializableConfig {
                base_url: Some(Url::parse("https://sandbox.example.com/api").unwrap()),
                api_token: Some("Zm9vOmJhcg==".into()),
            }
        );
    }

    #[tokio::test]
    async fn read_partial() {
        let directory = tempdir().unwrap();
        let file = directory.path().join("eslrest.toml");

        write(&file, r#"base_url = "https://example.com""#)
            .await
            .unwrap();

        assert_eq!(
            read_config(&file).await.unwrap(),
            SerializableConfig {
                base_url: Some(Url::parse("https://example.com").unwrap()),
                api_token: None,
            }
        );
    }

    #[tokio::test]
    async fn fail_to_read_unknown_field() {
        let directory = tempdir().unwrap();
        let file = directory.path().join("eslrest.toml");

        write(&file, "timeout = 42").await.unwrap();

        assert!(matches!(
            read_config(&file).await,
            Err(ConfigError::Toml(_))
        ));
    }

    #[tokio::test]
    async fn fail_to_read_missing_file() {
        let directory = tempdir().unwrap();

        assert!(matches!(
            read_config(&directory.path().join("missing.toml")).await,
            Err(ConfigError::Io(_))
        ));
    }
}
