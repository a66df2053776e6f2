use serde_json::Value;

/// Facts sniffed from the consumer project that shape `init` defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectInfo {
    pub is_next: bool,
    pub has_typescript: bool,
    pub has_tailwind: bool,
}

impl ProjectInfo {
    pub fn detect(package_json: &Value, has_tsconfig: bool) -> Self {
        Self {
            is_next: declares_dependency(package_json, "next"),
            has_typescript: has_tsconfig,
            has_tailwind: declares_dependency(package_json, "tailwindcss"),
        }
    }
}

/// True when `package` appears in `dependencies` or `devDependencies`.
pub fn declares_dependency(package_json: &Value, package: &str) -> bool {
    ["dependencies", "devDependencies"]
        .iter()
        .any(|section| package_json.get(section).and_then(|deps| deps.get(package)).is_some())
}
