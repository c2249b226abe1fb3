//! Engine adapter
//!
//! Resolves where the bundled engine lives and builds its command lines.

use super::invocation::Invocation;
use super::options::{CommandOptions, Language};
use crate::config::KernelConfig;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Engine archive shipped in the `core` directory
pub const DEFAULT_ARCHIVE: &str = "ehu-parse-1.0.jar";

/// Runtime that executes the archive
pub const DEFAULT_RUNTIME: &str = "java -jar";

/// Directory under the install root holding the archive
pub const CORE_DIR: &str = "core";

/// Port the engine listens on in server mode when none is given
pub const DEFAULT_SERVER_PORT: u16 = 55555;

/// Adapter for the bundled constituency parser.
///
/// The engine path is fixed at construction and never checked for
/// existence. Every command built afterwards is pure string work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelAdapter {
    lib: PathBuf,
    kernel: PathBuf,
    runtime: String,
    language: Language,
}

impl KernelAdapter {
    /// Create an adapter for an install root laid out as `<root>/core/<archive>`
    pub fn new(root: impl AsRef<Path>) -> Self {
        let lib = root.as_ref().join(CORE_DIR);
        let kernel = lib.join(DEFAULT_ARCHIVE);
        tracing::debug!("Engine kernel resolved to {}", kernel.display());

        Self {
            lib,
            kernel,
            runtime: DEFAULT_RUNTIME.to_string(),
            language: Language::default(),
        }
    }

    /// Create an adapter whose `core` directory is a sibling of `dir`
    pub fn from_adapter_dir(dir: &Path) -> Result<Self> {
        let root = dir.parent().ok_or_else(|| {
            Error::InstallRoot(format!("{} has no parent directory", dir.display()))
        })?;
        Ok(Self::new(root))
    }

    /// Discover the install root from the running executable.
    ///
    /// The executable is expected in a directory next to `core`, so the
    /// result does not depend on the current working directory.
    pub fn discover() -> Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe
            .parent()
            .ok_or_else(|| Error::InstallRoot(exe.display().to_string()))?;
        Self::from_adapter_dir(dir)
    }

    /// Build an adapter from configuration, discovering the root when unset
    pub fn from_config(config: &KernelConfig) -> Result<Self> {
        let mut adapter = match &config.root {
            Some(root) => Self::new(root),
            None => Self::discover()?,
        };
        if let Some(archive) = &config.archive {
            adapter = adapter.with_archive(archive);
        }
        if let Some(runtime) = &config.runtime {
            adapter = adapter.with_runtime(runtime);
        }
        if let Some(language) = config.language {
            adapter = adapter.with_language(language);
        }
        Ok(adapter)
    }

    /// Use a different archive file inside the `core` directory
    pub fn with_archive(mut self, archive: impl AsRef<Path>) -> Self {
        self.kernel = self.lib.join(archive);
        self
    }

    /// Use a different runtime, e.g. `/usr/lib/jvm/bin/java -jar`
    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = runtime.into();
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Path to the engine archive
    pub fn kernel(&self) -> &Path {
        &self.kernel
    }

    /// Directory holding the engine archive
    pub fn lib(&self) -> &Path {
        &self.lib
    }

    pub fn runtime(&self) -> &str {
        &self.runtime
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Build the shell command that pipes `options.input` into the engine:
    ///
    /// `cat <input> | <runtime> <kernel> -l <lang> [<arg> ...] [-t]`
    pub fn command(&self, options: &CommandOptions) -> String {
        let command = self.invocation(options).to_shell();
        tracing::debug!("Built engine command: {}", command);
        command
    }

    /// Same invocation as [`Self::command`], without the shell
    pub fn invocation(&self, options: &CommandOptions) -> Invocation {
        let (program, mut args) = self.base_args();
        args.extend(options.engine_arguments());
        Invocation::new(program, args, options.input().to_path_buf())
    }

    /// Build the command that starts the engine in server mode
    pub fn server_command(&self, port: Option<u16>) -> String {
        let port = port.unwrap_or(DEFAULT_SERVER_PORT);
        let (program, args) = self.base_args();

        let mut line = program;
        for arg in args {
            line.push(' ');
            line.push_str(&arg);
        }
        format!("{} --server --port {}", line, port)
    }

    /// Program plus `[<runtime args>...] <kernel> -l <lang>`.
    ///
    /// An empty runtime runs the archive itself.
    fn base_args(&self) -> (String, Vec<String>) {
        let kernel = self.kernel.to_string_lossy().to_string();
        let mut tokens = self.runtime.split_whitespace().map(str::to_string);

        let (program, mut args) = match tokens.next() {
            Some(program) => {
                let mut args: Vec<String> = tokens.collect();
                args.push(kernel);
                (program, args)
            }
            None => (kernel, Vec::new()),
        };
        args.push("-l".to_string());
        args.push(self.language.as_str().to_string());
        (program, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> KernelAdapter {
        KernelAdapter::new("/opt/kernel")
    }

    fn expected_prefix() -> String {
        format!("cat /tmp/x.txt | java -jar {} -l en", adapter().kernel().display())
    }

    #[test]
    fn test_kernel_path() {
        let adapter = adapter();
        assert_eq!(adapter.kernel(), Path::new("/opt/kernel/core/ehu-parse-1.0.jar"));
        assert_eq!(adapter.lib(), Path::new("/opt/kernel/core"));
    }

    #[test]
    fn test_command_plain() {
        let cmd = adapter().command(&CommandOptions::new("/tmp/x.txt"));
        assert_eq!(cmd, expected_prefix());
    }

    #[test]
    fn test_command_extra_arguments() {
        let cmd = adapter().command(&CommandOptions::new("/tmp/x.txt").arg("-v"));
        assert_eq!(cmd, format!("{} -v", expected_prefix()));
    }

    #[test]
    fn test_command_test_mode() {
        let cmd = adapter().command(&CommandOptions::new("/tmp/x.txt").test(true));
        assert_eq!(cmd, format!("{} -t", expected_prefix()));
    }

    #[test]
    fn test_command_test_flag_after_arguments() {
        let opts = CommandOptions::new("/tmp/x.txt").args(["-v", "--noHeads"]).test(true);
        let cmd = adapter().command(&opts);
        assert_eq!(cmd, format!("{} -v --noHeads -t", expected_prefix()));
    }

    #[test]
    fn test_command_is_deterministic() {
        let adapter = adapter();
        let opts = CommandOptions::new("/tmp/x.txt").arg("-v").test(true);
        assert_eq!(adapter.command(&opts), adapter.command(&opts));
    }

    #[test]
    fn test_empty_arguments_same_as_omitted() {
        let adapter = adapter();
        let omitted = CommandOptions::new("/tmp/x.txt");
        let empty = CommandOptions::new("/tmp/x.txt").args(Vec::<String>::new());
        assert_eq!(adapter.command(&omitted), adapter.command(&empty));
    }

    #[test]
    fn test_command_does_not_touch_filesystem() {
        let cmd = adapter().command(&CommandOptions::new("/no/such/file.txt"));
        assert!(cmd.starts_with("cat /no/such/file.txt | "));
    }

    #[test]
    fn test_invocation_matches_shell_form() {
        let adapter = adapter();
        let opts = CommandOptions::new("/tmp/x.txt").arg("-v").test(true);
        let invocation = adapter.invocation(&opts);

        assert_eq!(invocation.program(), "java");
        assert_eq!(
            invocation.args(),
            ["-jar", "/opt/kernel/core/ehu-parse-1.0.jar", "-l", "en", "-v", "-t"]
        );
        assert_eq!(invocation.to_shell(), adapter.command(&opts));
    }

    #[test]
    fn test_language_and_runtime_overrides() {
        let adapter = adapter()
            .with_language(Language::It)
            .with_runtime("/usr/bin/java -Xmx2g -jar");
        let cmd = adapter.command(&CommandOptions::new("in.txt"));
        assert_eq!(
            cmd,
            "cat in.txt | /usr/bin/java -Xmx2g -jar /opt/kernel/core/ehu-parse-1.0.jar -l it"
        );
    }

    #[test]
    fn test_empty_runtime_runs_archive() {
        let adapter = adapter().with_runtime("");
        let invocation = adapter.invocation(&CommandOptions::new("in.txt"));
        assert_eq!(invocation.program(), "/opt/kernel/core/ehu-parse-1.0.jar");
        assert_eq!(invocation.args(), ["-l", "en"]);
    }

    #[test]
    fn test_with_archive() {
        let adapter = adapter().with_archive("ehu-parse-1.1.jar");
        assert_eq!(adapter.kernel(), Path::new("/opt/kernel/core/ehu-parse-1.1.jar"));
    }

    #[test]
    fn test_server_command() {
        let adapter = adapter();
        assert_eq!(
            adapter.server_command(None),
            "java -jar /opt/kernel/core/ehu-parse-1.0.jar -l en --server --port 55555"
        );
        assert!(adapter.server_command(Some(8080)).ends_with("--port 8080"));
    }

    #[test]
    fn test_from_adapter_dir() {
        let adapter = KernelAdapter::from_adapter_dir(Path::new("/opt/kernel/bin")).unwrap();
        assert_eq!(adapter.kernel(), Path::new("/opt/kernel/core/ehu-parse-1.0.jar"));
        assert!(KernelAdapter::from_adapter_dir(Path::new("/")).is_err());
    }

    #[test]
    fn test_discover_ignores_working_directory() {
        let before = KernelAdapter::discover().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let cwd = std::env::current_dir().unwrap();

        std::env::set_current_dir(dir.path()).unwrap();
        let after = KernelAdapter::discover();
        std::env::set_current_dir(cwd).unwrap();

        assert_eq!(before.kernel(), after.unwrap().kernel());
        assert!(before.kernel().ends_with("core/ehu-parse-1.0.jar"));
    }

    #[test]
    fn test_from_config() {
        let config = KernelConfig {
            root: Some(PathBuf::from("/srv/nlp")),
            archive: None,
            runtime: Some("java -jar".to_string()),
            language: Some(Language::Es),
        };
        let adapter = KernelAdapter::from_config(&config).unwrap();
        assert_eq!(adapter.kernel(), Path::new("/srv/nlp/core/ehu-parse-1.0.jar"));
        assert_eq!(adapter.language(), Language::Es);
    }
}
