mod fixtures;

use fixtures::{fixture_dir, remove_fixture, sample_fixture, sample_set, write_fixture, FIXTURE_COUNT};
use mockify::internal::config::FixtureConfig;
use mockify::internal::fixtures::{
    rotation_index, FixtureError, FixtureLoadError, FixtureLoader, FixtureSet,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ==================== load() tests ====================

    #[test]
    fn test_load_reads_fixtures_in_order() {
        let dir = fixture_dir(FIXTURE_COUNT);
        let loader = FixtureLoader::new(dir.path(), FIXTURE_COUNT);

        let set = loader.load().expect("all fixtures should load");

        assert_eq!(set.len(), FIXTURE_COUNT);
        for (index, fixture) in set.iter().enumerate() {
            assert_eq!(fixture, &sample_fixture(index + 1));
        }
    }

    #[test]
    fn test_load_ignores_files_beyond_count() {
        let dir = fixture_dir(7);
        let loader = FixtureLoader::new(dir.path(), 3);

        let set = loader.load().unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.get(2), Some(&sample_fixture(3)));
        assert_eq!(set.get(3), None);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = fixture_dir(FIXTURE_COUNT);
        remove_fixture(dir.path(), 3);

        let err = FixtureLoader::new(dir.path(), FIXTURE_COUNT)
            .load()
            .expect_err("missing fixture must fail loading");

        match err {
            FixtureLoadError::Failed(failures) => {
                assert_eq!(failures.len(), 1);
                assert!(matches!(failures[0], FixtureError::Missing { .. }));
                assert_eq!(failures[0].path(), dir.path().join("3.json"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let dir = fixture_dir(FIXTURE_COUNT);
        write_fixture(dir.path(), 2, "{ \"results\": [ ");

        let err = FixtureLoader::new(dir.path(), FIXTURE_COUNT)
            .load()
            .unwrap_err();

        match err {
            FixtureLoadError::Failed(failures) => {
                assert_eq!(failures.len(), 1);
                assert!(matches!(failures[0], FixtureError::Malformed { .. }));
                assert!(failures[0].path().ends_with("2.json"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_reports_every_failure() {
        let dir = fixture_dir(FIXTURE_COUNT);
        remove_fixture(dir.path(), 2);
        write_fixture(dir.path(), 4, "not json");

        let err = FixtureLoader::new(dir.path(), FIXTURE_COUNT)
            .load()
            .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("2 fixture file(s) failed to load"));
        assert!(message.contains("2.json"));
        assert!(message.contains("4.json"));

        let FixtureLoadError::Failed(failures) = err else {
            panic!("expected aggregated failures");
        };
        let paths: Vec<PathBuf> = failures.iter().map(|f| f.path().to_path_buf()).collect();
        assert_eq!(
            paths,
            vec![dir.path().join("2.json"), dir.path().join("4.json")]
        );
    }

    #[test]
    fn test_load_missing_directory_reports_all_files() {
        let loader = FixtureLoader::new("/nonexistent/mockify/fixtures", FIXTURE_COUNT);

        match loader.load().unwrap_err() {
            FixtureLoadError::Failed(failures) => assert_eq!(failures.len(), FIXTURE_COUNT),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_zero_count_rejected() {
        let dir = fixture_dir(FIXTURE_COUNT);

        let err = FixtureLoader::new(dir.path(), 0).load().unwrap_err();

        assert!(matches!(err, FixtureLoadError::NoFixtures));
    }

    #[test]
    fn test_from_config_uses_dir_and_count() {
        let dir = fixture_dir(2);
        let cfg = FixtureConfig {
            dir: dir.path().to_path_buf(),
            count: 2,
        };

        let loader = FixtureLoader::from_config(&cfg);

        assert_eq!(loader.dir(), dir.path());
        assert_eq!(loader.fixture_path(1), dir.path().join("1.json"));
        assert_eq!(loader.load().unwrap().len(), 2);
    }

    #[test]
    fn test_shipped_fixtures_load() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("search");

        let set = FixtureLoader::new(dir, FIXTURE_COUNT).load().unwrap();

        assert_eq!(set.len(), FIXTURE_COUNT);
        assert!(set.iter().all(|fixture| fixture["results"].is_array()));
    }

    // ==================== FixtureSet tests ====================

    #[test]
    fn test_empty_set_rejected() {
        assert!(matches!(
            FixtureSet::new(Vec::new()),
            Err(FixtureLoadError::NoFixtures)
        ));
    }

    #[test]
    fn test_select_first_five_minutes_in_order() {
        let set = sample_set();

        for minute in 0..5u32 {
            assert_eq!(set.select(minute), &sample_fixture(minute as usize + 1));
        }
        assert_eq!(set.select(5), set.select(0));
    }

    #[test]
    fn test_select_every_minute_stays_in_range() {
        let set = sample_set();

        for minute in 0..60u32 {
            let index = rotation_index(minute, set.len());
            assert!(index < set.len());
            assert_eq!(set.select(minute), set.get(index).unwrap());
        }
    }

    #[test]
    fn test_rotation_wraps_at_hour_boundary() {
        assert_eq!(rotation_index(59, 5), 4);
        assert_eq!(rotation_index(0, 5), 0);
        assert_eq!(rotation_index(37, 5), 2);
        assert_eq!(rotation_index(37, 1), 0);
    }
}
