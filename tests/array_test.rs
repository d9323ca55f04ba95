mod common;
use common::*;

#[test]
fn test_byte_array_round_trip() {
    let mut r = runtime("10 A=1000 A:3)=65 ?=A:3) .=1 ?=A:2)\n");
    assert_eq!(exec(&mut r), "65 0");
}

#[test]
fn test_bytes_are_truncated_and_unsigned() {
    let mut r = runtime("10 A=10 A:0)=-1 ?=A:0) .=1 A:1)=300 ?=A:1)\n");
    assert_eq!(exec(&mut r), "255 44");
}

#[test]
fn test_word_aliases_bytes() {
    let mut r = runtime("10 A=1000 A(2)=$1234 ?=A:4) .=1 ?=A:5) .=1 ?=A(2)\n");
    assert_eq!(exec(&mut r), "52 18 4660");
}

#[test]
fn test_bytes_build_word() {
    let mut r = runtime("10 B=0 B:6)=$FE B:7)=$FF ?=B(3)\n");
    assert_eq!(exec(&mut r), "-2");
}

#[test]
fn test_two_variables_share_memory() {
    let mut r = runtime("10 A=100 B=102 A(1)=777 ?=B(0)\n");
    assert_eq!(exec(&mut r), "777");
}

#[test]
fn test_address_wraps() {
    let mut r = runtime("10 A=-1 A:1)=9 B=0 ?=B:0) .=1 ?=A(0)\n");
    assert_eq!(exec(&mut r), "9 2304");
}

#[test]
fn test_array_counted_loop_uses_base_variable() {
    let mut r = runtime("10 A:0)=5,3 ?=A @=A+1\n");
    assert_eq!(exec(&mut r), "0123");
}
