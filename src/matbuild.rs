use std::ops::{Index, IndexMut, Deref};

//

/// Matrix type and size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatType
{
    /// General matrix with a number of rows and a number of columns.
    General(usize, usize),
    /// Symmetric matrix, supplied in packed form, with a number of rows and columns.
    SymPack(usize),
}

impl MatType
{
    /// Length of array to store a [`MatType`] matrix.
    ///
    /// Returns the length.
    pub fn len(&self) -> usize
    {
        match self {
            MatType::General(n_row, n_col) => n_row * n_col,
            MatType::SymPack(n) => n * (n + 1) / 2,
        }
    }

    /// Size of a [`MatType`] matrix.
    ///
    /// Returns a tuple of a number of rows and a number of columns.
    pub fn size(&self) -> (usize, usize)
    {
        match self {
            MatType::General(n_row, n_col) => (*n_row, *n_col),
            MatType::SymPack(n) => (*n, *n),
        }
    }
}

//

/// Matrix builder
///
/// Dense matrix which owns a `Vec` of elements.
/// Column-major data is stored if [`MatType::General`],
/// the upper-triangular part in column-wise if [`MatType::SymPack`].
/// Elements are numbers (`MatBuild<F>`) or affine expressions ([`crate::MatExpr`]).
#[derive(Debug, Clone, PartialEq)]
pub struct MatBuild<T>
{
    typ: MatType,
    array: Vec<T>,
}

impl<T: Clone> MatBuild<T>
{
    /// Creates an instance.
    ///
    /// Returns the [`MatBuild`] instance with default (zero) data.
    /// * `typ` is Matrix type and size.
    pub fn new(typ: MatType) -> Self
    where T: Default
    {
        Self::from_elem(typ, T::default())
    }

    /// Creates an instance filled with the same element.
    ///
    /// * `typ` is Matrix type and size.
    /// * `elem` is the element.
    pub fn from_elem(typ: MatType, elem: T) -> Self
    {
        MatBuild {
            typ,
            array: vec![elem; typ.len()],
        }
    }

    /// Size of the matrix.
    ///
    /// Returns a tuple of a number of rows and columns.
    pub fn size(&self) -> (usize, usize)
    {
        self.typ.size()
    }

    /// Checks if symmetric packed.
    ///
    /// Returns `true` if [`MatType::SymPack`], `false` otherwise.
    pub fn is_sympack(&self) -> bool
    {
        matches!(self.typ, MatType::SymPack(_))
    }

    /// Data by a function.
    ///
    /// * `func` takes a row and a column of the matrix and returns data of each element.
    pub fn set_by_fn<M>(&mut self, mut func: M)
    where M: FnMut(usize, usize) -> T
    {
        match self.typ {
            MatType::General(nr, nc) => {
                for c in 0.. nc {
                    for r in 0.. nr {
                        self[(r, c)] = func(r, c);
                    }
                }
            },
            MatType::SymPack(n) => {
                for c in 0.. n {
                    for r in 0..= c {
                        self[(r, c)] = func(r, c);
                    }
                }
            },
        };
    }
    /// Builder pattern of [`MatBuild::set_by_fn`].
    pub fn by_fn<M>(mut self, func: M) -> Self
    where M: FnMut(usize, usize) -> T
    {
        self.set_by_fn(func);
        self
    }

    /// Data by an iterator in column-major.
    ///
    /// * `iter` iterates matrix data in column-major.
    pub fn set_iter_colmaj<I, D>(&mut self, iter: I)
    where I: IntoIterator<Item=D>, D: Deref<Target=T>
    {
        let mut i = iter.into_iter();
        let (nr, nc) = self.typ.size();

        for c in 0.. nc {
            for r in 0.. nr {
                if let Some(v) = i.next() {
                    self[(r, c)] = (*v).clone();
                }
                else {
                    break;
                }
            }
        }
    }
    /// Builder pattern of [`MatBuild::set_iter_colmaj`].
    pub fn iter_colmaj<I, D>(mut self, iter: I) -> Self
    where I: IntoIterator<Item=D>, D: Deref<Target=T>
    {
        self.set_iter_colmaj(iter);
        self
    }

    /// Data by an iterator in row-major.
    ///
    /// * `iter` iterates matrix data in row-major.
    pub fn set_iter_rowmaj<I, D>(&mut self, iter: I)
    where I: IntoIterator<Item=D>, D: Deref<Target=T>
    {
        let mut i = iter.into_iter();
        let (nr, nc) = self.typ.size();

        for r in 0.. nr {
            for c in 0.. nc {
                if let Some(v) = i.next() {
                    self[(r, c)] = (*v).clone();
                }
                else {
                    break;
                }
            }
        }
    }
    /// Builder pattern of [`MatBuild::set_iter_rowmaj`].
    pub fn iter_rowmaj<I, D>(mut self, iter: I) -> Self
    where I: IntoIterator<Item=D>, D: Deref<Target=T>
    {
        self.set_iter_rowmaj(iter);
        self
    }

    /// Iterates stored elements.
    ///
    /// Yields a row, a column and the element, in the storage order.
    /// Only the upper-triangular part is visited if [`MatType::SymPack`].
    pub fn elems(&self) -> impl Iterator<Item=(usize, usize, &T)> + '_
    {
        let typ = self.typ;
        self.array.iter().enumerate().map(move |(i, e)| {
            let (r, c) = match typ {
                MatType::General(nr, _) => (i % nr, i / nr),
                MatType::SymPack(_) => {
                    // largest c with c(c+1)/2 <= i
                    let mut c = 0;
                    while (c + 1) * (c + 2) / 2 <= i {
                        c += 1;
                    }
                    (i - c * (c + 1) / 2, c)
                },
            };
            (r, c, e)
        })
    }

    /// Element-wise conversion which may fail.
    ///
    /// Returns a matrix of the same type and size,
    /// or the first `Err` returned by `func` in the storage order.
    pub fn try_map<U, E, M>(&self, func: M) -> Result<MatBuild<U>, E>
    where M: FnMut(&T) -> Result<U, E>
    {
        let array = self.array.iter().map(func).collect::<Result<Vec<U>, E>>()?;

        Ok(MatBuild {
            typ: self.typ,
            array,
        })
    }

    fn index(&self, (r, c): (usize, usize)) -> usize
    {
        let i = match self.typ {
            MatType::General(nr, nc) => {
                assert!(r < nr);
                assert!(c < nc);
                c * nr + r
            },
            MatType::SymPack(n) => {
                assert!(r < n);
                assert!(c < n);
                let (r, c) = if r <= c {
                    (r, c)
                }
                else {
                    (c, r)
                };
                c * (c + 1) / 2 + r
            },
        };

        assert!(i < self.array.len());
        i
    }
}

//

impl<T: Clone> Index<(usize, usize)> for MatBuild<T>
{
    type Output = T;
    fn index(&self, index: (usize, usize)) -> &Self::Output
    {
        let i = self.index(index);

        &self.array[i]
    }
}

impl<T: Clone> IndexMut<(usize, usize)> for MatBuild<T>
{
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output
    {
        let i = self.index(index);

        &mut self.array[i]
    }
}

//

impl<T> AsRef<[T]> for MatBuild<T>
{
    fn as_ref(&self) -> &[T]
    {
        &self.array
    }
}

//

impl<T: Clone + core::fmt::LowerExp> core::fmt::Display for MatBuild<T>
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error>
    {
        let (nr, nc) = self.size();
        if nr == 0 || nc == 0 {
            write!(f, "[ ]")?;
        }
        else {
            write!(f, "[ {:.3e}", self[(0, 0)])?;
            if nc > 2 {
                write!(f, " ...")?;
            }
            if nc > 1 {
                write!(f, " {:.3e}", self[(0, nc - 1)])?;
            }

            if nr > 2 {
                writeln!(f)?;
                write!(f, "  ...")?;
            }

            if nr > 1 {
                writeln!(f)?;
                write!(f, "  {:.3e}", self[(nr - 1, 0)])?;
                if nc > 2 {
                    write!(f, " ...")?;
                }
                if nc > 1 {
                    write!(f, " {:.3e}", self[(nr - 1, nc - 1)])?;
                }
            }
            write!(f, " ]")?;
        }

        write!(f, " ({} x {}) ", nr, nc)?;
        match self.typ {
            MatType::General(_, _) => write!(f, "General")?,
            MatType::SymPack(_) => write!(f, "Symmetric Packed")?,
        }

        Ok(())
    }
}

//

#[test]
fn test_matbuild1()
{
    let m = MatBuild::<f64>::new(MatType::General(2, 3))
            .iter_rowmaj(&[
                1., 2., 3.,
                4., 5., 6.,
            ]);

    assert_eq!(m.as_ref(), &[1., 4., 2., 5., 3., 6.]);
    assert_eq!(m[(1, 2)], 6.);

    let e: Vec<_> = m.elems().map(|(r, c, v)| (r, c, *v)).collect();
    assert_eq!(e[3], (1, 1, 5.));
}

#[test]
fn test_matbuild2()
{
    let m = MatBuild::<f64>::new(MatType::SymPack(3))
            .by_fn(|r, c| (10 * r + c) as f64);

    // symmetric access
    assert_eq!(m[(2, 1)], m[(1, 2)]);
    assert_eq!(m[(2, 1)], 12.);

    let rc: Vec<_> = m.elems().map(|(r, c, _)| (r, c)).collect();
    assert_eq!(rc, vec![(0, 0), (0, 1), (1, 1), (0, 2), (1, 2), (2, 2)]);

    let neg = m.try_map(|v| if *v < 100. {Ok(-v)} else {Err(())}).unwrap();
    assert!(neg.is_sympack());
    assert_eq!(neg[(0, 2)], -2.);
}

#[test]
#[should_panic]
fn test_matbuild3()
{
    let m = MatBuild::<f64>::new(MatType::General(2, 2));
    let _v: f64 = m[(2, 0)];
}

#[test]
fn test_matbuild4()
{
    let m = MatBuild::<f64>::new(MatType::SymPack(3)).iter_rowmaj(&[
        4.,  2., -2.,
        2., 10., 0.5,
       -2., 0.5, 2.25,
    ]);
    assert_eq!(format!("{}", m), "[ 4.000e0 ... -2.000e0\n  ...\n  -2.000e0 ... 2.250e0 ] (3 x 3) Symmetric Packed");

    let m = MatBuild::<f64>::new(MatType::General(1, 2)).iter_rowmaj(&[1., 2.]);
    assert_eq!(format!("{}", m), "[ 1.000e0 2.000e0 ] (1 x 2) General");

    let m = MatBuild::<f64>::new(MatType::General(0, 0));
    assert_eq!(format!("{}", m), "[ ] (0 x 0) General");
}
