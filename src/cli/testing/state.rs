use crate::base;

/// Returns a filesystem object anchored at a temporary directory. The `Fs` must
/// not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

/// The expected or actual contents of a working directory.
#[derive(Debug, PartialEq, Default)]
pub struct State {
    /// Unset if the config file does not exist.
    config: Option<base::Config>,
    /// Names of all files other than the config file.
    files: std::collections::BTreeSet<String>,
    /// Cleaned workbooks by file name.
    exports: std::collections::BTreeMap<String, base::Report>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Adds a file whose contents are not checked.
    pub fn with_file(mut self, name: &str) -> Self {
        self.files.insert(name.to_string());
        self
    }

    /// Adds a cleaned workbook holding `report`.
    pub fn with_export(mut self, name: &str, report: base::Report) -> Self {
        self.files.insert(name.to_string());
        self.exports.insert(name.to_string(), report);
        self
    }

    /// Reads the directory behind `fs`. Only the exports named in `want` are
    /// parsed.
    pub fn from_fs(fs: &base::Fs, want: &State) -> Self {
        let config_path = fs.path::<base::Config>();
        let config = config_path
            .exists()
            .then(|| fs.read::<base::Config>().unwrap());

        let files = std::fs::read_dir(fs.dir())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|p| *p != config_path)
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect::<std::collections::BTreeSet<_>>();

        let exports = want
            .exports
            .keys()
            .filter(|name| files.contains(*name))
            .map(|name| {
                let bytes = std::fs::read(fs.resolve(name)).unwrap();
                (name.clone(), base::testing::read_export(&bytes))
            })
            .collect();

        Self {
            config,
            files,
            exports,
        }
    }
}

/// Inputs to place in a working directory before running commands.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    inputs: Vec<(&'a str, base::testing::Workbook)>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the config file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Adds an input workbook.
    pub fn with_input(mut self, name: &'a str, workbook: base::testing::Workbook) -> Self {
        self.inputs.push((name, workbook));
        self
    }

    /// Writes contents to `fs`. Panics if the config is not a valid
    /// serialization.
    pub fn to_fs(&self, fs: &base::Fs) {
        if let Some(s) = self.config {
            let obj = s.parse::<base::Config>();
            assert!(obj.is_ok(), "{:?}", obj);
            std::fs::write(fs.path::<base::Config>(), s).unwrap()
        }
        for (name, workbook) in &self.inputs {
            workbook.save(fs.resolve(name));
        }
    }

    pub fn to_state(&self) -> State {
        let mut state = State::new();
        if let Some(s) = self.config {
            state = state.with_config(s);
        }
        for (name, _) in &self.inputs {
            state = state.with_file(name);
        }
        state
    }
}
