//! [`FileSystem`] [`Storage`] implementation.

use std::{
    fs,
    path::{Path, PathBuf},
};

use common::operations::Insert;
use tracerr::Traced;
use tracing as log;

use crate::{
    infra::{storage, Storage},
    report::Document,
};

/// [`Storage`] keeping [`Document`]s as files in a directory.
#[derive(Clone, Debug)]
pub struct FileSystem {
    /// Directory the [`Document`]s are written into.
    root: PathBuf,
}

impl FileSystem {
    /// Creates a new [`FileSystem`] writing into the provided `root`
    /// directory.
    ///
    /// The directory is created on the first write, if missing.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory this [`FileSystem`] writes into.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Storage<Insert<Document>> for FileSystem {
    type Ok = PathBuf;
    type Err = Traced<storage::Error>;

    fn execute(
        &self,
        Insert(document): Insert<Document>,
    ) -> Result<Self::Ok, Self::Err> {
        fs::create_dir_all(&self.root)
            .map_err(storage::Error::Io)
            .map_err(tracerr::wrap!())?;

        let name: &str = document.name.as_ref();
        let path = self.root.join(name);
        fs::write(&path, document.content)
            .map_err(storage::Error::Io)
            .map_err(tracerr::wrap!())?;

        log::debug!("written `{}`", path.display());
        Ok(path)
    }
}
