//! On-disk prefix header generation.

use camino::Utf8PathBuf;
use hdrgen_header::{FsSourceReader, HeaderError, PrefixHeaderAssembler};
use hdrgen_types::{InputUnit, Platform, PlatformDescriptor};
use pretty_assertions::assert_eq;
use fs_err as fs;
use tempfile::TempDir;

fn temp_root(temp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap()
}

fn text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).expect("utf-8 header")
}

#[test]
fn mobile_header_from_snippets_and_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp_root(&temp);
    let extra = root.join("extra.h");
    fs::write(&extra, "int x;\n").unwrap();

    let units = vec![
        InputUnit::new("A").with_snippet("#define A 1"),
        InputUnit::new("B").with_snippet("#define B 2"),
        InputUnit::new("C").with_snippet("#define A 1"),
        InputUnit::new("D").with_file(extra),
    ];
    let assembler =
        PrefixHeaderAssembler::new(units, PlatformDescriptor::new("ios"), FsSourceReader::new(root));

    let expected = "\
#ifdef __OBJC__
#import <UIKit/UIKit.h>
#endif

#define A 1
#define B 2
int x;
";
    assert_eq!(text(assembler.generate().unwrap()), expected);
}

#[test]
fn relative_files_resolve_against_reader_root() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp_root(&temp);
    fs::create_dir_all(root.join("Pods/Foo")).unwrap();
    fs::write(root.join("Pods/Foo/Foo-prefix.h"), "#define FOO_PREFIX\n").unwrap();

    let units = vec![InputUnit::new("Foo").with_file("Pods/Foo/Foo-prefix.h")];
    let assembler =
        PrefixHeaderAssembler::new(units, PlatformDescriptor::new("osx"), FsSourceReader::new(root));

    assert_eq!(
        text(assembler.generate().unwrap()),
        "#ifdef __OBJC__\n#import <Cocoa/Cocoa.h>\n#endif\n\n#define FOO_PREFIX\n"
    );
}

#[test]
fn latin1_file_is_copied_byte_for_byte() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp_root(&temp);
    let latin1: &[u8] = b"// \xa9 Acme\nint x;\n";
    fs::write(root.join("l1.h"), latin1).unwrap();

    let units = vec![InputUnit::new("Legal").with_file("l1.h")];
    let assembler = PrefixHeaderAssembler::new(
        units,
        PlatformDescriptor::new("ios"),
        FsSourceReader::new(root),
    );

    let out = assembler.generate().unwrap();
    assert!(out.ends_with(latin1));
    assert!(out.starts_with(b"#ifdef __OBJC__\n#import <UIKit/UIKit.h>\n#endif\n\n"));
}

#[test]
fn missing_file_reports_offending_path() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp_root(&temp);
    fs::write(root.join("present.h"), "int p;\n").unwrap();

    let units = vec![
        InputUnit::new("Present").with_file("present.h"),
        InputUnit::new("Missing").with_file("absent.h"),
    ];
    let assembler = PrefixHeaderAssembler::new(
        units,
        PlatformDescriptor::new("ios"),
        FsSourceReader::new(root),
    );

    let err = assembler.generate().unwrap_err();
    assert!(matches!(err, HeaderError::ReadRawFile { .. }));
    assert_eq!(err.path().map(|p| p.as_str()), Some("absent.h"));
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("Missing"));
}

#[test]
fn repeated_generation_rereads_files() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp_root(&temp);
    fs::write(root.join("a.h"), "int a;\n").unwrap();

    let units = vec![InputUnit::new("A").with_file("a.h")];
    let assembler = PrefixHeaderAssembler::new(
        units,
        PlatformDescriptor::new("ios"),
        FsSourceReader::new(root.clone()),
    );

    let first = assembler.generate().unwrap();
    assert_eq!(assembler.generate().unwrap(), first);

    fs::write(root.join("a.h"), "int b;\n").unwrap();
    assert!(text(assembler.generate().unwrap()).ends_with("int b;\n"));
}

#[test]
fn every_recognized_platform_is_guarded() {
    for platform in Platform::ALL {
        let assembler = PrefixHeaderAssembler::new(
            vec![],
            PlatformDescriptor::new(platform.name()),
            FsSourceReader::default(),
        );
        let expected = format!(
            "#ifdef __OBJC__\n{}\n#endif\n\n",
            platform.umbrella_import()
        );
        assert_eq!(text(assembler.generate().unwrap()), expected);
    }
}
