#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::VecDeque, ffi::OsString, path::PathBuf};

    use cvrun::{
        build::{BuildOrchestrator, BuildRequest, RunStatus},
        config::CvrunConfig,
        constants::{DEBUG_FLAGS, RELEASE_FLAGS},
        error::Error,
        flags::BuildMode,
        runner::{ProcessOutput, ProcessRunner},
    };

    const LIBRARY_FLAGS: &str = "-I/usr/include/opencv4 -lopencv_core -lopencv_highgui\n";

    /// Records every call and answers from scripted exit codes
    struct FakeRunner {
        discovery: ProcessOutput,
        run_codes: RefCell<VecDeque<Option<i32>>>,
        captured: RefCell<Vec<Vec<OsString>>>,
        ran: RefCell<Vec<Vec<OsString>>>,
    }

    impl FakeRunner {
        fn new(run_codes: &[Option<i32>]) -> Self {
            Self {
                discovery: ProcessOutput {
                    code: Some(0),
                    stdout: LIBRARY_FLAGS.to_string(),
                    stderr: String::new(),
                },
                run_codes: RefCell::new(run_codes.iter().copied().collect()),
                captured: RefCell::new(vec![]),
                ran: RefCell::new(vec![]),
            }
        }
    }

    impl ProcessRunner for FakeRunner {
        fn capture(&self, args: &[OsString]) -> Result<ProcessOutput, Error> {
            self.captured.borrow_mut().push(args.to_vec());
            Ok(self.discovery.clone())
        }

        fn run(&self, args: &[OsString]) -> Result<Option<i32>, Error> {
            self.ran.borrow_mut().push(args.to_vec());
            Ok(self.run_codes.borrow_mut().pop_front().unwrap_or(Some(0)))
        }
    }

    fn strings(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    fn config() -> CvrunConfig {
        CvrunConfig::default()
            .with_compiler_filepath("fake-g++")
            .with_pkg_config_filepath("fake-pkg-config")
    }

    #[test]
    fn test_debug_invocation_order() {
        let config = config();
        let runner = FakeRunner::new(&[Some(0)]);
        let request = BuildRequest::new(&["a.cpp"]).unwrap();

        let outcome = BuildOrchestrator::new(&config, &runner)
            .with_stdout(Vec::new())
            .run(&request)
            .unwrap();
        assert_eq!(outcome.output_filepath, PathBuf::from("a.out"));
        assert_eq!(outcome.run_status, None);

        assert_eq!(
            *runner.captured.borrow(),
            [strings(&["fake-pkg-config", "opencv", "--cflags", "--libs"])]
        );

        let mut expected = strings(&["fake-g++", "-std=c++14"]);
        expected.extend(strings(DEBUG_FLAGS));
        expected.extend(strings(&["-o", "a.out", "a.cpp"]));
        expected.extend(LIBRARY_FLAGS.split_whitespace().map(OsString::from));
        assert_eq!(*runner.ran.borrow(), [expected]);
    }

    #[test]
    fn test_release_replaces_debug_flags() {
        let config = config();
        let runner = FakeRunner::new(&[Some(0)]);
        let request = BuildRequest::new(&["a.cpp", "b.cpp"])
            .unwrap()
            .with_mode(BuildMode::Release);

        BuildOrchestrator::new(&config, &runner)
            .with_stdout(Vec::new())
            .run(&request)
            .unwrap();

        let ran = runner.ran.borrow();
        let args = &ran[0];
        assert_eq!(&args[2..2 + RELEASE_FLAGS.len()], RELEASE_FLAGS);
        assert!(!args.iter().any(|arg| arg == "-ggdb"));
        assert!(args.windows(4).any(|w| w == ["-o", "result.out", "a.cpp", "b.cpp"]));
    }

    #[test]
    fn test_compile_failure_skips_execution() {
        let config = config();
        let runner = FakeRunner::new(&[Some(1)]);
        let request = BuildRequest::new(&["a.cpp"]).unwrap().with_execute(true);

        let err = BuildOrchestrator::new(&config, &runner)
            .with_stdout(Vec::new())
            .run(&request)
            .unwrap_err();
        assert!(matches!(err, Error::CompilationFailure(Some(1))));
        assert_eq!(runner.ran.borrow().len(), 1);
    }

    #[test]
    fn test_discovery_failure_skips_compilation() {
        let config = config();
        let mut runner = FakeRunner::new(&[]);
        runner.discovery = ProcessOutput {
            code: Some(1),
            stdout: String::new(),
            stderr: "Package opencv was not found in the pkg-config search path.".into(),
        };
        let request = BuildRequest::new(&["a.cpp"]).unwrap();

        let err = BuildOrchestrator::new(&config, &runner)
            .with_stdout(Vec::new())
            .run(&request)
            .unwrap_err();
        assert!(matches!(err, Error::DiscoveryFailure(_)));
        assert!(runner.ran.borrow().is_empty());
    }

    #[test]
    fn test_execute_absolute_output_with_arguments() {
        let config = config();
        let runner = FakeRunner::new(&[Some(0), Some(7)]);
        let request = BuildRequest::new(&["foo.cpp"])
            .unwrap()
            .with_execute(true)
            .with_arguments(&["lena.png", "--gray"]);

        let outcome = BuildOrchestrator::new(&config, &runner)
            .with_stdout(Vec::new())
            .run(&request)
            .unwrap();
        assert_eq!(outcome.run_status, Some(RunStatus::Exited(7)));
        assert_eq!(outcome.exit_code(false), 0);
        assert_eq!(outcome.exit_code(true), 7);

        let ran = runner.ran.borrow();
        assert_eq!(ran.len(), 2);
        let program = std::env::current_dir().unwrap().join("foo.out");
        assert_eq!(
            ran[1],
            [
                program.into_os_string(),
                OsString::from("lena.png"),
                OsString::from("--gray")
            ]
        );
    }

    #[test]
    fn test_verbose_echoes_command_lines() {
        let config = config();
        let runner = FakeRunner::new(&[Some(0), Some(0)]);
        let request = BuildRequest::new(&["a.cpp"])
            .unwrap()
            .with_output("/tmp/app")
            .with_execute(true)
            .with_verbose(true)
            .with_arguments(&["x"]);

        let mut orchestrator = BuildOrchestrator::new(&config, &runner).with_stdout(Vec::new());
        orchestrator.run(&request).unwrap();

        let echoed = String::from_utf8(orchestrator.stdout().clone()).unwrap();
        let lines: Vec<&str> = echoed.lines().collect();
        assert_eq!(lines[0], "Compiler call:");
        assert!(lines[1].starts_with("fake-g++ -std=c++14 -ggdb"));
        assert!(lines[1].contains(" -o /tmp/app a.cpp -I/usr/include/opencv4"));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Program call:");
        assert_eq!(lines[4], "/tmp/app x");
        assert_eq!(orchestrator.runner().ran.borrow().len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_source_reaches_compiler_unchanged() {
        use std::{
            ffi::OsStr,
            os::unix::ffi::{OsStrExt, OsStringExt},
            path::Path,
        };

        let config = config();
        let runner = FakeRunner::new(&[Some(0), Some(0)]);
        let source = Path::new(OsStr::from_bytes(b"caf\xe9.cpp"));
        let request = BuildRequest::new(&[source]).unwrap().with_execute(true);

        let mut orchestrator = BuildOrchestrator::new(&config, &runner).with_stdout(Vec::new());
        orchestrator.run(&request).unwrap();

        let ran = orchestrator.runner().ran.borrow();
        let compiler_args: Vec<Vec<u8>> = ran[0].iter().cloned().map(OsString::into_vec).collect();
        let n = compiler_args.len();
        let tail = &compiler_args[n - 6..n - 3];
        assert_eq!(tail[0], b"-o");
        assert_eq!(tail[1], b"caf\xe9.out");
        assert_eq!(tail[2], b"caf\xe9.cpp");

        let program = std::env::current_dir().unwrap().join(OsStr::from_bytes(b"caf\xe9.out"));
        assert_eq!(ran[1], [program.into_os_string()]);
    }

    #[test]
    fn test_quiet_by_default() {
        let config = config();
        let runner = FakeRunner::new(&[Some(0)]);
        let request = BuildRequest::new(&["a.cpp"]).unwrap();

        let mut orchestrator = BuildOrchestrator::new(&config, &runner).with_stdout(Vec::new());
        orchestrator.run(&request).unwrap();
        assert!(orchestrator.stdout().is_empty());
    }
}
