//! The packaging files emitted for a bindings package.
//!
//! Every template is a fixed string. Values from [`PkgMetadata`] are
//! substituted as-is, so identical metadata always renders identical bytes.

use std::fmt;

use serde::Serialize;

use crate::core::gencmd::makefile_gen_command;
use crate::core::metadata::PkgMetadata;

/// One of the generated packaging files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Artifact {
    SetupPy,
    ManifestIn,
    License,
    Readme,
    Makefile,
}

impl Artifact {
    /// All artifacts, in the order they are written.
    pub const ALL: [Artifact; 5] = [
        Artifact::SetupPy,
        Artifact::ManifestIn,
        Artifact::License,
        Artifact::Readme,
        Artifact::Makefile,
    ];

    /// File name inside the package directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Artifact::SetupPy => "setup.py",
            Artifact::ManifestIn => "MANIFEST.in",
            Artifact::License => "LICENSE",
            Artifact::Readme => "README.md",
            Artifact::Makefile => "Makefile",
        }
    }

    /// Render the file contents for `meta`.
    pub fn render(&self, meta: &PkgMetadata) -> String {
        match self {
            Artifact::SetupPy => render_setup_py(meta),
            Artifact::ManifestIn => render_manifest_in(),
            Artifact::License => render_license(&meta.name),
            Artifact::Readme => render_readme(&meta.name, &meta.description),
            Artifact::Makefile => render_makefile(meta),
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

impl std::str::FromStr for Artifact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "setup.py" | "setup" => Ok(Artifact::SetupPy),
            "manifest.in" | "manifest" => Ok(Artifact::ManifestIn),
            "license" => Ok(Artifact::License),
            "readme.md" | "readme" => Ok(Artifact::Readme),
            "makefile" => Ok(Artifact::Makefile),
            _ => Err(format!(
                "unknown artifact '{}'; expected one of setup.py, MANIFEST.in, LICENSE, README.md, Makefile",
                s
            )),
        }
    }
}

/// Render `setup.py`.
pub fn render_setup_py(meta: &PkgMetadata) -> String {
    format!(
        r#"import setuptools

with open("README.md", "r") as fh:
    long_description = fh.read()

setuptools.setup(
    name="{dist_name}",
    version="{version}",
    author="{author}",
    author_email="{email}",
    description="{description}",
    long_description=long_description,
    long_description_content_type="text/markdown",
    url="{url}",
    packages=setuptools.find_packages(),
    classifiers=[
        "Programming Language :: Python :: 3",
        "License :: OSI Approved :: BSD License",
        "Operating System :: OS Independent",
    ],
    include_package_data=True,
)
"#,
        dist_name = meta.dist_name(),
        version = meta.version,
        author = meta.author,
        email = meta.email,
        description = meta.description,
        url = meta.url,
    )
}

/// Render `MANIFEST.in`. It takes no parameters.
pub fn render_manifest_in() -> String {
    "global-include *.so *.py\nglobal-exclude build.py\n".to_string()
}

/// Render the BSD 3-Clause `LICENSE` held by the authors of `name`.
pub fn render_license(name: &str) -> String {
    format!(
        r#"BSD 3-Clause License

Copyright (c) 2018, The {name} Authors
All rights reserved.

Redistribution and use in source and binary forms, with or without
modification, are permitted provided that the following conditions are met:

* Redistributions of source code must retain the above copyright notice, this
  list of conditions and the following disclaimer.

* Redistributions in binary form must reproduce the above copyright notice,
  this list of conditions and the following disclaimer in the documentation
  and/or other materials provided with the distribution.

* Neither the name of the copyright holder nor the names of its
  contributors may be used to endorse or promote products derived from
  this software without specific prior written permission.

THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
"#
    )
}

/// Render `README.md`.
pub fn render_readme(name: &str, description: &str) -> String {
    format!("# {name}\n\n{description}\n\n")
}

/// Render the `Makefile`.
///
/// Recipe lines must start with a tab, so this template is written with
/// explicit `\t` escapes rather than as a raw string.
pub fn render_makefile(meta: &PkgMetadata) -> String {
    format!(
        "# Makefile for generating and installing python bindings to {name}
# File is generated by pypkg
# {cmd}

PYTHON={python}
PIP=$(PYTHON) -m pip

all: gen

gen:
\t{gen}

build:
\t$(MAKE) -C {name} build

install:
\t# this does a local install of the package, building the sdist and then directly installing it
\trm -rf dist build */*.egg-info *.egg-info
\t$(PYTHON) setup.py sdist
\t$(PIP) install dist/*.tar.gz

install-exe:
\t# install executable into /usr/local/bin
\tcp {name}/{name} /usr/local/bin

",
        name = meta.name,
        cmd = meta.gen_command,
        gen = makefile_gen_command(&meta.gen_command),
        python = meta.interpreter_name(),
    )
}
