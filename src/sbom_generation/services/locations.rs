use crate::sbom_generation::domain::ModuleCoordinates;

/// Repositories published at this URI get a bare purl
pub const MAVEN_CENTRAL: &str = "https://repo.maven.apache.org/maven2";

/// `<repo>/<group path>/<name>/<version>/<file name>`
pub fn download_location(
    repository_uri: &str,
    module: &ModuleCoordinates,
    file_name: &str,
) -> String {
    format!(
        "{}/{}/{}/{}/{}",
        repository_uri.trim_end_matches('/'),
        module.group.replace('.', "/"),
        module.name,
        module.version,
        file_name
    )
}

/// Maven purl, qualified with the repository unless it is Maven Central
pub fn purl(repository_uri: &str, module: &ModuleCoordinates) -> String {
    let base = format!("pkg:maven/{}/{}@{}", module.group, module.name, module.version);
    let repository_uri = repository_uri.trim_end_matches('/');
    if repository_uri == MAVEN_CENTRAL {
        base
    } else {
        format!("{}?repository_url={}", base, urlencoding::encode(repository_uri))
    }
}
