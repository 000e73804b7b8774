use pretty_assertions::assert_eq;
use shellpin_descriptor::{Arch, ConfigurationError, Descriptor, Os, Platform};

const DARWIN_ADDITIONS: [&str; 3] = ["libiconv", "Security", "SystemConfiguration"];

#[test]
fn every_supported_platform_resolves_to_a_usable_environment() {
    let descriptor = Descriptor::pinned();

    for platform in Platform::SUPPORTED {
        let env = descriptor.resolve(platform).expect("supported platform");
        assert!(!env.executables().is_empty());
        assert!(env.contains("redis"), "{platform}: datastore missing");
        assert!(env.contains("cargo"), "{platform}: toolchain missing");
        assert!(env.contains("rustc"), "{platform}: toolchain missing");
    }
}

#[test]
fn resolution_is_deterministic() {
    let descriptor = Descriptor::pinned();

    for platform in Platform::SUPPORTED {
        let first = descriptor.resolve(platform).unwrap();
        let second = descriptor.resolve(platform).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.executables(), second.executables());
    }
}

#[test]
fn darwin_platforms_gain_the_apple_package_set() {
    let descriptor = Descriptor::pinned();

    for platform in Platform::SUPPORTED {
        let env = descriptor.resolve(platform).unwrap();
        for name in DARWIN_ADDITIONS {
            assert_eq!(
                env.contains(name),
                platform.is_darwin(),
                "{name} on {platform}"
            );
        }
    }
}

#[test]
fn aarch64_darwin_scenario() {
    let env = Descriptor::pinned()
        .resolve(Platform::new(Arch::Aarch64, Os::Darwin))
        .unwrap();

    assert_eq!(env.toolchain.extensions.len(), 3);
    assert_eq!(env.toolchain.targets.len(), 2);
    assert!(env.contains("redis"));
    assert!(env.contains("libiconv"));
    assert_eq!(env.frameworks(), ["Security", "SystemConfiguration"]);
}

#[test]
fn x86_64_linux_scenario() {
    let env = Descriptor::pinned()
        .resolve(Platform::new(Arch::X86_64, Os::Linux))
        .unwrap();

    assert_eq!(env.toolchain.extensions.len(), 3);
    assert_eq!(env.toolchain.targets.len(), 2);
    assert!(env.contains("redis"));
    assert_eq!(env.packages.len(), 1, "base package set only");
    assert!(env.frameworks().is_empty());
}

#[test]
fn unsupported_platform_produces_no_environment() {
    let err = "armv7l-linux".parse::<Platform>().unwrap_err();
    assert!(matches!(err, ConfigurationError::UnsupportedPlatform(_)));
}

#[test]
fn darwin_augmentation_is_idempotent() {
    let mut descriptor = Descriptor::pinned();
    // A darwin package already present in the base set must not change the
    // resolved result.
    descriptor
        .packages
        .insert(shellpin_descriptor::Package::library("libiconv"));

    let env = descriptor
        .resolve(Platform::new(Arch::X86_64, Os::Darwin))
        .unwrap();
    let names: Vec<&str> = env.packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names.iter().filter(|name| **name == "libiconv").count(),
        1
    );
}

#[test]
fn json_view_is_stable_across_resolutions() {
    let descriptor = Descriptor::pinned();
    let platform = Platform::new(Arch::Aarch64, Os::Darwin);

    let first = serde_json::to_string(&descriptor.resolve(platform).unwrap()).unwrap();
    let second = serde_json::to_string(&descriptor.resolve(platform).unwrap()).unwrap();
    assert_eq!(first, second);
}
