/// File and directory names under the config root
pub mod paths {
    /// Directory under the home dir used when XDG_CONFIG_HOME is unset
    pub const DEFAULT_CONFIG_ROOT: &str = ".config";

    /// Directory holding the context store
    pub const USERS_DIR_NAME: &str = "glab-ctx";

    /// Context store file name
    pub const USERS_FILE_NAME: &str = "users.yml";

    /// Directory holding the glab configuration
    pub const GLAB_DIR_NAME: &str = "glab-cli";

    /// glab configuration file name
    pub const GLAB_FILE_NAME: &str = "config.yml";

    /// Extension used for the temporary file during atomic writes
    pub const TMP_EXTENSION: &str = "yml.tmp";
}

/// Environment variable names
pub mod env {
    /// Overrides the context store path
    pub const USERS_FILE: &str = "GLAB_CTX_USERS_FILE";

    /// Overrides the glab configuration file path
    pub const GLAB_CONFIG: &str = "GLAB_CTX_GLAB_CONFIG";

    /// glab's own config directory override
    pub const GLAB_CONFIG_DIR: &str = "GLAB_CONFIG_DIR";

    /// XDG base directory for configuration
    pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
}

/// Keys inside the glab configuration document
pub mod glab {
    /// Top-level mapping of per-host settings
    pub const HOSTS_KEY: &str = "hosts";

    /// Per-host user name
    pub const USER_KEY: &str = "user";

    /// Per-host API token
    pub const TOKEN_KEY: &str = "token";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
