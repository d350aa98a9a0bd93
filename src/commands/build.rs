use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::{
    repository::DATA_PATH,
    runtime::Runtime,
    site::{HOME_ROUTE, REPOS_ROUTE, Route, Theme, render_home_page, render_repos_page},
    view::{RepositoryView, ViewState},
};

use super::config::Config;

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub out_dir: PathBuf,
    pub theme: Theme,
    /// Fail instead of publishing the error page when the collection cannot
    /// be loaded.
    pub strict: bool,
}

/// What a build wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: Vec<PathBuf>,
    /// Number of published repositories, `None` if loading failed.
    pub repositories: Option<usize>,
}

/// Generate the static site into `options.out_dir`.
#[tracing::instrument(skip(config))]
pub async fn build<R: Runtime + 'static>(
    config: Config<R>,
    options: BuildOptions,
) -> Result<BuildReport> {
    let runtime = &*config.runtime;

    let mut view = RepositoryView::new();
    view.mount(&*config.source).await;

    if let ViewState::Failed(failure) = view.state() {
        if options.strict {
            return Err(anyhow::Error::from(failure.clone()).context(format!(
                "Cannot load repositories from {}",
                config.source.location()
            )));
        }
        warn!("Publishing error page: {}", failure);
    }

    let mut pages = Vec::new();
    pages.push(write_page(
        runtime,
        &options.out_dir,
        HOME_ROUTE,
        &render_home_page(options.theme),
    )?);
    pages.push(write_page(
        runtime,
        &options.out_dir,
        REPOS_ROUTE,
        &render_repos_page(view.state(), options.theme),
    )?);

    let data_path = options.out_dir.join(DATA_PATH.trim_start_matches('/'));
    let repositories = match view.state() {
        ViewState::Ready(ready) => {
            let json = serde_json::to_string_pretty(ready.collection())
                .context("Failed to serialize repositories")?;
            write_file(runtime, &data_path, json.as_bytes())?;
            Some(ready.collection().len())
        }
        _ => {
            // A data file left by an earlier build would contradict the error page.
            if runtime.exists(&data_path) {
                debug!("Removing stale {:?}", data_path);
                runtime.remove_file(&data_path)?;
            }
            None
        }
    };

    info!(
        "Built {} page(s) into {}",
        pages.len(),
        options.out_dir.display()
    );
    println!(
        "Built {} page(s) into {}",
        pages.len(),
        options.out_dir.display()
    );
    match repositories {
        Some(count) => println!("Published {} repositories.", count),
        None => println!("Repositories could not be loaded; the repos page shows the error."),
    }

    Ok(BuildReport {
        pages,
        repositories,
    })
}

fn write_page<R: Runtime + ?Sized>(
    runtime: &R,
    out_dir: &Path,
    route: Route,
    html: &str,
) -> Result<PathBuf> {
    let path = out_dir.join(route.output);
    debug!("Writing route {} to {:?}", route.path, path);
    write_file(runtime, &path, html.as_bytes())?;
    Ok(path)
}

fn write_file<R: Runtime + ?Sized>(runtime: &R, path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !runtime.exists(parent) {
            runtime.create_dir_all(parent)?;
        }
    }
    runtime.write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{FetchFailure, MockRepoSource, RepositoryRecord};
    use crate::runtime::{MockRuntime, RealRuntime};
    use std::sync::Arc;
    use tempfile::tempdir;

    fn sample() -> Vec<RepositoryRecord> {
        vec![
            RepositoryRecord {
                id: 1,
                name: "A".into(),
                description: Some("Go tools".into()),
                url: "https://github.com/ogerly/A".into(),
                language: Some("Go".into()),
                star_count: 10,
                fork_count: 1,
            },
            RepositoryRecord {
                id: 2,
                name: "B".into(),
                description: None,
                url: "https://github.com/ogerly/B".into(),
                language: Some("Rust".into()),
                star_count: 20,
                fork_count: 0,
            },
        ]
    }

    fn source_returning(result: Result<Vec<RepositoryRecord>, String>) -> MockRepoSource {
        let mut source = MockRepoSource::new();
        source.expect_location().returning(|| "mock".into());
        source.expect_fetch_all().times(1).returning(move || {
            result.clone().map_err(|msg| anyhow::anyhow!(msg))
        });
        source
    }

    #[tokio::test]
    async fn test_build_writes_pages_and_data() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().join("dist");
        let config = Config {
            runtime: Arc::new(RealRuntime),
            source: Box::new(source_returning(Ok(sample()))),
        };

        let report = build(
            config,
            BuildOptions {
                out_dir: out_dir.clone(),
                theme: Theme::Dark,
                strict: false,
            },
        )
        .await
        .unwrap();

        assert_eq!(
            report.pages,
            vec![out_dir.join("index.html"), out_dir.join("repos/index.html")]
        );
        assert_eq!(report.repositories, Some(2));

        let home = std::fs::read_to_string(out_dir.join("index.html")).unwrap();
        assert!(home.contains("Welcome to ogerly.dev"));
        assert!(home.contains(r#"class="dark""#));

        let repos = std::fs::read_to_string(out_dir.join("repos/index.html")).unwrap();
        let b = repos.find(r#"data-repo-id="2""#).unwrap();
        let a = repos.find(r#"data-repo-id="1""#).unwrap();
        assert!(b < a);

        let data = std::fs::read_to_string(out_dir.join("data/repos.json")).unwrap();
        let published: Vec<RepositoryRecord> = serde_json::from_str(&data).unwrap();
        assert_eq!(published, sample());
    }

    #[tokio::test]
    async fn test_build_publishes_error_page() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().to_path_buf();
        let config = Config {
            runtime: Arc::new(RealRuntime),
            source: Box::new(source_returning(Err("network error".into()))),
        };

        let report = build(
            config,
            BuildOptions {
                out_dir: out_dir.clone(),
                theme: Theme::Light,
                strict: false,
            },
        )
        .await
        .unwrap();

        assert_eq!(report.repositories, None);
        let repos = std::fs::read_to_string(out_dir.join("repos/index.html")).unwrap();
        assert!(repos.contains("Error: network error"));
        assert!(!repos.contains("<select"));
        assert!(!out_dir.join("data/repos.json").exists());
    }

    #[tokio::test]
    async fn test_failed_build_removes_earlier_data_file() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().to_path_buf();
        let options = BuildOptions {
            out_dir: out_dir.clone(),
            theme: Theme::Light,
            strict: false,
        };

        let config = Config {
            runtime: Arc::new(RealRuntime),
            source: Box::new(source_returning(Ok(sample()))),
        };
        build(config, options.clone()).await.unwrap();
        assert!(out_dir.join("data/repos.json").exists());

        let config = Config {
            runtime: Arc::new(RealRuntime),
            source: Box::new(source_returning(Err("network error".into()))),
        };
        let report = build(config, options).await.unwrap();

        assert_eq!(report.repositories, None);
        let repos = std::fs::read_to_string(out_dir.join("repos/index.html")).unwrap();
        assert!(repos.contains("Error: network error"));
        assert!(!out_dir.join("data/repos.json").exists());
    }

    #[tokio::test]
    async fn test_build_strict_fails_without_writing() {
        let mut runtime = MockRuntime::new();
        runtime.expect_write().never();
        runtime.expect_create_dir_all().never();
        runtime.expect_remove_file().never();

        let config = Config {
            runtime: Arc::new(runtime),
            source: Box::new(source_returning(Err("network error".into()))),
        };

        let err = build(
            config,
            BuildOptions {
                out_dir: PathBuf::from("/site/dist"),
                theme: Theme::Light,
                strict: true,
            },
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("Cannot load repositories from mock"));
        let failure = err.downcast_ref::<FetchFailure>().unwrap();
        assert!(failure.message().contains("network error"));
    }

    #[test]
    fn test_write_file_creates_missing_parent() {
        let mut runtime = MockRuntime::new();
        let path = PathBuf::from("/site/dist/repos/index.html");

        runtime
            .expect_exists()
            .with(mockall::predicate::eq(PathBuf::from("/site/dist/repos")))
            .returning(|_| false);
        runtime
            .expect_create_dir_all()
            .with(mockall::predicate::eq(PathBuf::from("/site/dist/repos")))
            .times(1)
            .returning(|_| Ok(()));
        runtime
            .expect_write()
            .withf(|p, c| p == Path::new("/site/dist/repos/index.html") && c == b"<html>")
            .times(1)
            .returning(|_, _| Ok(()));

        write_file(&runtime, &path, b"<html>").unwrap();
    }
}
